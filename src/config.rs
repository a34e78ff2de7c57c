use anyhow::{Result, anyhow};
use std::env;
use std::fmt;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// Credentials and upstream endpoints, built once at startup and handed to
/// the clients that need them.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub serpapi_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub serpapi_base_url: String,
}

impl Config {
    /// Load from the process environment. `main` loads `.env` before this runs.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            gemini_api_key: get_env(&lookup, "GEMINI_API_KEY")?,
            serpapi_key: get_env(&lookup, "SERPAPI_KEY")?,
            gemini_model: get_env_or_default(&lookup, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get_env_or_default(&lookup, "GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            serpapi_base_url: get_env_or_default(
                &lookup,
                "SERPAPI_BASE_URL",
                DEFAULT_SERPAPI_BASE_URL,
            ),
        })
    }

    pub fn with_model(mut self, model: Option<String>) -> Config {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.gemini_model = model;
        }
        self
    }
}

// Keys stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("serpapi_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("serpapi_base_url", &self.serpapi_base_url)
            .finish()
    }
}

fn get_env<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("Missing required environment variable: {key}"))
}

fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
