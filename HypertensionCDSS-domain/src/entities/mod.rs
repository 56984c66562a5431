// Domain entities and value objects
pub mod assessment;
pub mod blood_pressure;
pub mod conversions;
pub mod patient;

// Re-export common types for easier imports
pub use assessment::{ClassProbabilities, ConfidenceBand, ConfidenceResult, RiskAssessment};
pub use blood_pressure::BloodPressureCategory;
pub use patient::{FieldRange, PatientField, PatientInput, ValidatedInput, FIELD_RANGES};
