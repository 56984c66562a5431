// Hypertension CDSS Data
// This crate owns the classifier model: its on-disk format, loading and evaluation

// Model types and the classifier trait
pub mod model;

// Loading models from disk
pub mod repository;

// Fixed-output classifier - only available for tests or with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use model::{ClassifierTrait, FeatureVector, ModelOutput, PipelineModel, FEATURE_NAMES};
pub use repository::{ModelError, ModelRepository};
