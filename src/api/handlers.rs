use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::data_models::VideoResult;
use crate::errors::PipelineError;
use crate::pipeline::VideoSearchPipeline;

use super::models::{ErrorResponse, HealthResponse, SearchRequest};

/// Any failure of `/search`, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Pipeline(PipelineError),
    InvalidBody(JsonRejection),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Pipeline(err) => {
                let status = match err {
                    PipelineError::EmptyPrompt => StatusCode::BAD_REQUEST,
                    PipelineError::TopicExtraction(_) | PipelineError::Search(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status.is_server_error() {
                    error!("search request failed: {}", err);
                }
                (status, err.to_string())
            }
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

pub async fn search_handler(
    State(pipeline): State<Arc<VideoSearchPipeline>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<VideoResult>>, ApiError> {
    let start = Instant::now();
    let Json(request) = body?;

    let outcome = pipeline.run(&request.prompt).await?;

    info!(
        topic = %outcome.topic,
        results = outcome.results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search completed"
    );
    Ok(Json(outcome.results))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
