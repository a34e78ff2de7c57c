use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::data_models::VideoResult;
use crate::errors::PipelineError;
use crate::normalizer::normalize;
use crate::search::{SerpApiVideoSearch, VideoSearch};
use crate::topic::{GeminiTopicExtractor, TopicExtractor};

/// Upper bound on results handed to either front-end.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub topic: String,
    pub results: Vec<VideoResult>,
}

/// prompt -> topic -> raw records -> normalized results.
///
/// Holds no per-request state, so one instance is shared by every request.
pub struct VideoSearchPipeline {
    extractor: Arc<dyn TopicExtractor>,
    search: Arc<dyn VideoSearch>,
}

impl VideoSearchPipeline {
    pub fn new(extractor: Arc<dyn TopicExtractor>, search: Arc<dyn VideoSearch>) -> Self {
        Self { extractor, search }
    }

    /// Wire up the Gemini and SerpAPI clients.
    pub fn from_config(config: &Config) -> Result<Self> {
        let extractor =
            GeminiTopicExtractor::new(config).context("Failed to build language model client")?;
        let search = SerpApiVideoSearch::new(config).context("Failed to build search client")?;
        Ok(Self::new(Arc::new(extractor), Arc::new(search)))
    }

    pub async fn extract_topic(&self, prompt: &str) -> Result<String, PipelineError> {
        if prompt.trim().is_empty() {
            return Err(PipelineError::EmptyPrompt);
        }
        info!(prompt_len = prompt.len(), "extracting search topic");
        let topic = self.extractor.extract_topic(prompt).await.map_err(|e| {
            error!("topic extraction failed: {:#}", e);
            e
        })?;
        info!(%topic, "extracted search topic");
        Ok(topic)
    }

    /// Search for `query` and return at most [`MAX_RESULTS`] normalized results.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<VideoResult>, PipelineError> {
        let raw = self.search.search_videos(query).await.map_err(|e| {
            error!("video search failed: {:#}", e);
            e
        })?;
        let mut results = normalize(&raw);
        results.truncate(MAX_RESULTS);
        info!(
            raw = raw.len(),
            returned = results.len(),
            "normalized video results"
        );
        Ok(results)
    }

    /// Run both stages, failing on the first upstream error.
    pub async fn run(&self, prompt: &str) -> Result<SearchOutcome, PipelineError> {
        let topic = self.extract_topic(prompt).await?;
        let results = self.search_videos(&topic).await?;
        Ok(SearchOutcome { topic, results })
    }
}
