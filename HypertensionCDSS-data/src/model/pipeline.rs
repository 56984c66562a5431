use serde::{Deserialize, Serialize};

use super::{ClassifierTrait, DecisionTree, FeatureVector, ModelOutput, StandardScaler, FEATURE_NAMES};
use crate::repository::ModelError;

/// Model file format understood by this crate
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Free-form information recorded when the model was exported
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub trained_at: Option<String>,

    #[serde(default)]
    pub test_accuracy: Option<f64>,
}

/// Standard scaler followed by a decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineModel {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub classes: [u8; 2],
    pub scaler: StandardScaler,
    pub tree: DecisionTree,
    #[serde(default)]
    pub metadata: ModelMetadata,
}

impl PipelineModel {
    /// Validate everything `predict` relies on
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(ModelError::Invalid(format!(
                "unsupported model format version {} (expected {})",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }

        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            return Err(ModelError::Invalid(format!(
                "model features {:?} do not match expected {:?}",
                self.feature_names, FEATURE_NAMES
            )));
        }

        if self.classes != [0, 1] {
            return Err(ModelError::Invalid(format!(
                "model classes must be [0, 1], found {:?}",
                self.classes
            )));
        }

        self.scaler.validate()?;
        self.tree.validate()
    }
}

impl ClassifierTrait for PipelineModel {
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, ModelError> {
        let scaled = self.scaler.transform(features);
        let counts = self.tree.leaf_for(&scaled)?;

        let total: f64 = counts.iter().sum();
        if total <= 0.0 {
            return Err(ModelError::Invalid("reached an empty leaf".to_string()));
        }
        let probabilities = [counts[0] / total, counts[1] / total];

        // Ties resolve to the first class
        let label = if probabilities[1] > probabilities[0] {
            self.classes[1]
        } else {
            self.classes[0]
        };

        Ok(ModelOutput { label, probabilities })
    }

    fn describe(&self) -> String {
        format!(
            "standard scaler + decision tree ({} nodes)",
            self.tree.nodes.len()
        )
    }
}
