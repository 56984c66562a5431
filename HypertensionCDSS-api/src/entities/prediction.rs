use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hypertension_cdss_domain::entities::RiskAssessment;

/// Patient measurements submitted for assessment
///
/// Documentation only: the handler validates the raw JSON itself so that
/// every rejection carries a field-specific message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictionRequest {
    /// Age in whole years (1-120)
    #[schema(example = 65, minimum = 1, maximum = 120)]
    pub age: u8,

    /// Body Mass Index (10.0-70.0)
    #[schema(example = 32.0, minimum = 10.0, maximum = 70.0)]
    pub bmi: f64,

    /// Total cholesterol in mg/dL (50-600)
    #[schema(example = 250, minimum = 50, maximum = 600)]
    pub cholesterol: u16,

    /// Systolic blood pressure in mmHg (60-300)
    #[schema(example = 150, minimum = 60, maximum = 300)]
    pub systolic: u16,

    /// Diastolic blood pressure in mmHg (30-200), below systolic
    #[schema(example = 95, minimum = 30, maximum = 200)]
    pub diastolic: u16,
}

/// Assessment returned for a valid request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// 0 = normotensive, 1 = hypertensive
    pub prediction: u8,

    /// Confidence percentage (60.0-90.0)
    #[schema(example = 84.0)]
    pub confidence: f64,

    /// "Low", "Moderate" or "High"
    #[schema(example = "High")]
    pub confidence_band: String,

    /// Clinical risk score (0-100)
    #[schema(example = 82)]
    pub risk_score: u8,

    /// AHA/ACC category label
    #[schema(example = "High BP – Stage 2")]
    pub bp_category: String,

    /// CSS-safe stage identifier
    #[schema(example = "stage2")]
    pub bp_stage: String,

    /// Color hint
    #[schema(example = "red")]
    pub bp_color: String,

    /// Identified risk factors, most significant measurement first
    pub risk_factors: Vec<String>,
}

impl From<RiskAssessment> for PredictionResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            prediction: assessment.prediction,
            confidence: assessment.confidence.confidence,
            confidence_band: assessment.confidence.band.to_string(),
            risk_score: assessment.risk_score,
            bp_category: assessment.bp_category.label().to_string(),
            bp_stage: assessment.bp_category.stage().to_string(),
            bp_color: assessment.bp_category.color().to_string(),
            risk_factors: assessment.risk_factors,
        }
    }
}
