use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the language-model call that turns a prompt into a search topic.
#[derive(Debug, Error)]
pub enum TopicExtractionError {
    #[error("request to language model failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("language model returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("language model returned no usable text")]
    EmptyResponse,
}

/// Failure of the video search call.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to search api failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("search api returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("search api error: {0}")]
    Api(String),
}

// The url may carry an api key, so it never goes into the message.
impl From<reqwest::Error> for TopicExtractionError {
    fn from(err: reqwest::Error) -> Self {
        TopicExtractionError::Request(err.without_url())
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Request(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Error extracting topic: {0}")]
    TopicExtraction(#[from] TopicExtractionError),

    #[error("Error searching YouTube: {0}")]
    Search(#[from] SearchError),
}
