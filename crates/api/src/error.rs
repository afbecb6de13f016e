//! API Error Types

use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use data_validator::ValidationError;
use feature_engine::EncodeError;
use inference_engine::InferenceError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Encode(#[from] EncodeError),
    #[error("invalid vehicle details ({} problems)", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("prediction failed: {0}")]
    Inference(#[from] InferenceError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("configuration error: {0}")]
    Config(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ApiError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Encode(EncodeError::UnknownCategory { .. }) => "unknown_category",
            ApiError::Validation(_) => "out_of_range",
            ApiError::Inference(_) => "inference_error",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Body(_) => "invalid_body",
            ApiError::Config(_) => "configuration_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Encode(_) | ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Inference(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            ApiError::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
            _ => Vec::new(),
        };
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
            details,
        };
        (self.status(), Json(body)).into_response()
    }
}
