use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::data_models::RawVideoRecord;
use crate::errors::SearchError;
use crate::topic::USER_AGENT;

/// SerpAPI engine that searches YouTube.
pub const VIDEO_ENGINE: &str = "youtube";

#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Run one search and hand back the raw records in ranking order.
    async fn search_videos(&self, query: &str) -> Result<Vec<RawVideoRecord>, SearchError>;
}

pub struct SerpApiVideoSearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiVideoSearch {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_key: config.serpapi_key.clone(),
            base_url: config.serpapi_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl VideoSearch for SerpApiVideoSearch {
    async fn search_videos(&self, query: &str) -> Result<Vec<RawVideoRecord>, SearchError> {
        let params = [
            ("engine", VIDEO_ENGINE),
            ("search_query", query),
            ("api_key", self.api_key.as_str()),
        ];

        debug!(engine = VIDEO_ENGINE, query, "requesting video search");
        let resp = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body: Value = resp.json().await?;
        video_results(body)
    }
}

/// Pull `video_results` out of a search response. An `error` field means the
/// search failed even if the status said otherwise.
pub fn video_results(body: Value) -> Result<Vec<RawVideoRecord>, SearchError> {
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Err(SearchError::Api(message.to_string()));
    }
    match body {
        Value::Object(mut map) => match map.remove("video_results") {
            Some(Value::Array(records)) => Ok(records),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}
