use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use hypertension_cdss_domain::services::AssessmentError;

use crate::entities::common::ErrorResponse;

/// Message returned when no classifier is loaded
pub const MODEL_NOT_LOADED: &str =
    "Model not loaded. Check MODEL_PATH and restart the server.";

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON in request body")]
    InvalidJson,

    #[error("Request body must be valid JSON")]
    EmptyBody,

    /// Validation message, returned verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Model not loaded")]
    ModelNotLoaded,

    /// `detail` is only populated in debug mode
    #[error("Prediction failed")]
    PredictionFailed { detail: Option<String> },

    #[error("Endpoint not found")]
    NotFound,
}

impl ApiError {
    /// Map an assessment failure; internal details are exposed only when `debug` is set
    pub fn from_assessment(error: AssessmentError, debug: bool) -> Self {
        match error {
            AssessmentError::Validation(e) => ApiError::Validation(e.to_string()),
            AssessmentError::ModelUnavailable => ApiError::ModelNotLoaded,
            AssessmentError::Model(e) => ApiError::PredictionFailed {
                detail: debug.then(|| e.to_string()),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::EmptyBody | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ModelNotLoaded | ApiError::PredictionFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::ModelNotLoaded => {
                ErrorResponse::with_detail(MODEL_NOT_LOADED, "No classifier was loaded at startup")
            }
            ApiError::PredictionFailed { detail } => ErrorResponse::with_detail(
                self.to_string(),
                detail.as_deref().unwrap_or("Internal server error"),
            ),
            _ => ErrorResponse::new(self.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_response())).into_response()
    }
}
