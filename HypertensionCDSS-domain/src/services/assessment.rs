use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::entities::conversions;
use crate::entities::{PatientInput, RiskAssessment};
use crate::services::blood_pressure::classify_bp;
use crate::services::confidence::calculate_confidence;
use crate::services::risk_factors::identify_risk_factors;
use crate::services::risk_score::calculate_risk_score;
use crate::services::validation::{validate_inputs, ValidationError};
use hypertension_cdss_data::{ClassifierTrait, ModelError, ModelOutput, PipelineModel};

/// Assessment service errors
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The payload failed validation; the message is client-facing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No classifier was loaded at startup
    #[error("Model not loaded")]
    ModelUnavailable,

    /// The classifier failed on validated input
    #[error("Prediction failed: {0}")]
    Model(#[from] ModelError),
}

/// Trait for assessment service operations
pub trait AssessmentServiceTrait: Send + Sync {
    /// Whether a classifier is available
    fn model_loaded(&self) -> bool;

    /// Description of the loaded classifier, if any
    fn model_description(&self) -> Option<String>;

    /// Validate a raw payload and run the full assessment
    fn assess(&self, payload: &Value) -> Result<RiskAssessment, AssessmentError>;
}

/// Assessment service combining the classifier with the clinical rules
pub struct AssessmentService<C: ClassifierTrait> {
    classifier: Option<C>,
}

impl<C: ClassifierTrait> AssessmentService<C> {
    /// Create a service around a loaded classifier
    pub fn new(classifier: C) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Create a service with no classifier; every assessment fails
    pub fn without_model() -> Self {
        Self { classifier: None }
    }
}

impl<C: ClassifierTrait> AssessmentServiceTrait for AssessmentService<C> {
    fn model_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    fn model_description(&self) -> Option<String> {
        self.classifier.as_ref().map(|classifier| classifier.describe())
    }

    fn assess(&self, payload: &Value) -> Result<RiskAssessment, AssessmentError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AssessmentError::ModelUnavailable)?;

        let input = validate_inputs(payload)?;
        debug!(submitted = ?input.submitted, patient = ?input.patient, "Validated prediction input");

        // The classifier sees the numbers as submitted; the rules see truncated fields
        let features = conversions::convert_to_feature_vector(&input);
        let output = classifier.predict(&features)?;
        debug!(label = output.label, probabilities = ?output.probabilities, "Classifier output");

        let assessment = evaluate_rules(&input.patient, &output);
        debug!(
            risk_score = assessment.risk_score,
            bp_category = %assessment.bp_category,
            confidence = assessment.confidence.confidence,
            "Assessment complete"
        );

        Ok(assessment)
    }
}

/// Apply the clinical rules to validated input and a classifier output
pub fn evaluate_rules(input: &PatientInput, output: &ModelOutput) -> RiskAssessment {
    let risk_score = calculate_risk_score(input);

    RiskAssessment {
        prediction: output.label,
        confidence: calculate_confidence(&output.probabilities, Some(risk_score)),
        risk_score,
        bp_category: classify_bp(input.systolic, input.diastolic),
        risk_factors: identify_risk_factors(input),
    }
}

/// Create the assessment service around an optionally loaded model
pub fn create_assessment_service(
    model: Option<PipelineModel>,
) -> impl AssessmentServiceTrait {
    match model {
        Some(model) => AssessmentService::new(model),
        None => AssessmentService::without_model(),
    }
}

/// Create an assessment service backed by a fixed-output classifier
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_assessment_service(
    classifier: hypertension_cdss_data::testing::StaticClassifier,
) -> impl AssessmentServiceTrait {
    AssessmentService::new(classifier)
}
