use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use hypertension_cdss_domain::services::AssessmentError;

use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::entities::prediction::PredictionResponse;

/// Predict hypertension risk for one patient
///
/// The body is read as raw bytes so that malformed JSON, a JSON `null` and
/// field-level problems each get their own message.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Assessment computed", body = PredictionResponse),
        (status = 400, description = "Malformed or invalid input", body = ErrorResponse),
        (status = 500, description = "Model not loaded or prediction failed", body = ErrorResponse),
    ),
    tag = "prediction"
)]
#[instrument(skip(state, body), fields(request_id = %Uuid::new_v4()))]
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    if !state.assessment.model_loaded() {
        error!("Prediction requested but no model is loaded");
        return Err(ApiError::ModelNotLoaded);
    }

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected request body: {}", e);
        ApiError::InvalidJson
    })?;

    if payload.is_null() {
        warn!("Rejected null request body");
        return Err(ApiError::EmptyBody);
    }

    match state.assessment.assess(&payload) {
        Ok(assessment) => {
            info!(
                prediction = assessment.prediction,
                risk_score = assessment.risk_score,
                "Prediction served"
            );
            Ok(Json(PredictionResponse::from(assessment)))
        }
        Err(e) => {
            match &e {
                AssessmentError::Validation(reason) => warn!("Validation failed: {}", reason),
                _ => error!("Prediction error: {}", e),
            }
            Err(ApiError::from_assessment(e, state.debug))
        }
    }
}
