//! Fake upstream clients shared by the integration tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use vidseek::config::Config;
use vidseek::data_models::RawVideoRecord;
use vidseek::errors::{SearchError, TopicExtractionError};
use vidseek::pipeline::VideoSearchPipeline;
use vidseek::search::VideoSearch;
use vidseek::topic::TopicExtractor;

#[allow(dead_code)]
pub enum FakeExtractor {
    Topic(String),
    QuotaExceeded,
}

#[async_trait]
impl TopicExtractor for FakeExtractor {
    async fn extract_topic(&self, _prompt: &str) -> Result<String, TopicExtractionError> {
        match self {
            FakeExtractor::Topic(topic) => Ok(topic.clone()),
            FakeExtractor::QuotaExceeded => Err(TopicExtractionError::Status {
                status: StatusCode::TOO_MANY_REQUESTS,
                body: "quota exceeded".to_string(),
            }),
        }
    }
}

/// Records every query it receives; `None` makes every search fail.
#[allow(dead_code)]
pub struct FakeSearch {
    records: Option<Vec<RawVideoRecord>>,
    pub queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSearch {
    pub fn returning(records: Vec<RawVideoRecord>) -> Arc<FakeSearch> {
        Arc::new(FakeSearch {
            records: Some(records),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<FakeSearch> {
        Arc::new(FakeSearch {
            records: None,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn seen_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for FakeSearch {
    async fn search_videos(&self, query: &str) -> Result<Vec<RawVideoRecord>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => Err(SearchError::Api("Invalid API key.".to_string())),
        }
    }
}

#[allow(dead_code)]
pub fn pipeline_with(extractor: FakeExtractor, search: Arc<FakeSearch>) -> Arc<VideoSearchPipeline> {
    Arc::new(VideoSearchPipeline::new(Arc::new(extractor), search))
}

#[allow(dead_code)]
pub fn video_records(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "title": format!("video {i}"),
                "link": format!("https://www.youtube.com/watch?v={i}"),
                "channel": {"name": "Channel", "link": "https://www.youtube.com/@channel"},
                "thumbnail": {"static": format!("https://i.ytimg.com/vi/{i}/hq720.jpg")},
                "views": 1000 + i,
                "published_date": "1 month ago",
                "length": "10:00"
            })
        })
        .collect()
}

#[allow(dead_code)]
pub fn test_config(gemini_base_url: &str, serpapi_base_url: &str) -> Config {
    Config {
        gemini_api_key: "test-gemini-key".to_string(),
        serpapi_key: "test-serpapi-key".to_string(),
        gemini_model: "gemini-1.5-flash".to_string(),
        gemini_base_url: gemini_base_url.to_string(),
        serpapi_base_url: serpapi_base_url.to_string(),
    }
}
