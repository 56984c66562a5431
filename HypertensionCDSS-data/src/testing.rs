// Test doubles for the classifier
// Only compiled for tests or when the "mock" feature is enabled

use crate::model::{ClassifierTrait, FeatureVector, ModelOutput};
use crate::repository::ModelError;

/// Classifier that ignores its input and returns a configured output
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    output: ModelOutput,
    should_fail: bool,
}

impl Default for StaticClassifier {
    fn default() -> Self {
        Self::hypertensive()
    }
}

impl StaticClassifier {
    /// Always predicts class 1 with pure-leaf probabilities
    pub fn hypertensive() -> Self {
        Self {
            output: ModelOutput {
                label: 1,
                probabilities: [0.0, 1.0],
            },
            should_fail: false,
        }
    }

    /// Always predicts class 0 with pure-leaf probabilities
    pub fn normotensive() -> Self {
        Self {
            output: ModelOutput {
                label: 0,
                probabilities: [1.0, 0.0],
            },
            should_fail: false,
        }
    }

    /// Configure the classifier to fail every prediction
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl ClassifierTrait for StaticClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ModelOutput, ModelError> {
        if self.should_fail {
            return Err(ModelError::Invalid(
                "static classifier is configured to fail".to_string(),
            ));
        }
        Ok(self.output)
    }

    fn describe(&self) -> String {
        format!("static classifier (label {})", self.output.label)
    }
}
