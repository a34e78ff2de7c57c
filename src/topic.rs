use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::errors::TopicExtractionError;

pub const USER_AGENT: &str = concat!("vidseek/", env!("CARGO_PKG_VERSION"));

/// Instruction sent to the model; the prompt is embedded verbatim.
pub fn topic_instruction(prompt: &str) -> String {
    format!(
        "Extract the main search topic from this prompt: '{prompt}'. \
         Return only the key topic or search query, without any additional text."
    )
}

#[async_trait]
pub trait TopicExtractor: Send + Sync {
    /// Distill a free-form prompt into a short search query.
    async fn extract_topic(&self, prompt: &str) -> Result<String, TopicExtractionError>;
}

/// Topic extraction backed by the Gemini `generateContent` endpoint.
pub struct GeminiTopicExtractor {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>();
        Some(text)
    }
}

impl GeminiTopicExtractor {
    pub fn new(config: &Config) -> Result<Self, TopicExtractionError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TopicExtractor for GeminiTopicExtractor {
    async fn extract_topic(&self, prompt: &str) -> Result<String, TopicExtractionError> {
        let body = json!({
            "contents": [ { "role": "user", "parts": [ { "text": topic_instruction(prompt) } ] } ]
        });

        debug!(model = %self.model, "requesting topic extraction");
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TopicExtractionError::Status { status, body });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let topic = parsed.text().unwrap_or_default().trim().to_string();
        if topic.is_empty() {
            return Err(TopicExtractionError::EmptyResponse);
        }
        Ok(topic)
    }
}
