//! Classifier model types
//!
//! The model is a two-step pipeline: a standard scaler followed by a shallow
//! decision tree. It is trained elsewhere and shipped as a JSON document.

mod pipeline;
mod scaler;
mod tree;

pub use pipeline::{ModelMetadata, PipelineModel, MODEL_FORMAT_VERSION};
pub use scaler::StandardScaler;
pub use tree::{DecisionTree, TreeNode};

use crate::repository::ModelError;

/// Feature names in the order the classifier expects them
pub const FEATURE_NAMES: [&str; 5] = ["age", "bmi", "cholesterol", "systolic", "diastolic"];

/// Number of features the classifier consumes
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// A single patient's features, ordered as `FEATURE_NAMES`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a feature vector from the five raw measurements
    pub fn new(age: f64, bmi: f64, cholesterol: f64, systolic: f64, diastolic: f64) -> Self {
        Self([age, bmi, cholesterol, systolic, diastolic])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// Output of a single classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    /// Predicted class: 0 = normotensive, 1 = hypertensive
    pub label: u8,

    /// Class probabilities `[p(0), p(1)]`
    pub probabilities: [f64; 2],
}

/// Trait for hypertension classifiers
///
/// Implementations must be read-only after construction so one instance can
/// serve concurrent requests.
pub trait ClassifierTrait: Send + Sync {
    /// Classify one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, ModelError>;

    /// Short human-readable description of the model
    fn describe(&self) -> String;
}

impl<C: ClassifierTrait + ?Sized> ClassifierTrait for std::sync::Arc<C> {
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, ModelError> {
        (**self).predict(features)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
