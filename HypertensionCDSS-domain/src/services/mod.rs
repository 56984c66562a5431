pub mod assessment;
pub mod blood_pressure;
pub mod confidence;
pub mod risk_factors;
pub mod risk_score;
pub mod thresholds;
pub mod validation;

// Domain services
// The clinical rule engine is pure and synchronous; the assessment service
// wires it to the classifier.

// Re-export service traits and factory functions
pub use assessment::{
    create_assessment_service, evaluate_rules, AssessmentError, AssessmentService,
    AssessmentServiceTrait,
};
pub use blood_pressure::classify_bp;
pub use confidence::{calculate_confidence, classify_confidence_band};
pub use risk_factors::identify_risk_factors;
pub use risk_score::calculate_risk_score;
pub use validation::{validate_inputs, ValidationError};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use assessment::create_mock_assessment_service;
