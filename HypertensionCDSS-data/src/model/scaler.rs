use serde::{Deserialize, Serialize};

use super::{FeatureVector, FEATURE_COUNT};
use crate::repository::ModelError;

/// Per-feature standardization `(x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Check the scaler matches the feature vector width and has usable scales
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "scaler must have {} means and scales, found {} and {}",
                FEATURE_COUNT,
                self.mean.len(),
                self.scale.len()
            )));
        }

        if let Some(index) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ModelError::Invalid(format!(
                "scaler scale for feature {} must be finite and non-zero",
                index
            )));
        }

        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ModelError::Invalid("scaler means must be finite".to_string()));
        }

        Ok(())
    }

    /// Standardize a feature vector
    pub fn transform(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.values().iter().enumerate() {
            scaled[i] = (value - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![50.0, 26.0, 215.0, 135.0, 84.0],
            scale: vec![10.0, 2.0, 50.0, 25.0, 4.0],
        }
    }

    #[test]
    fn test_transform_standardizes_each_feature() {
        let scaled = scaler().transform(&FeatureVector::new(60.0, 24.0, 215.0, 160.0, 80.0));
        assert_eq!(scaled, [1.0, -1.0, 0.0, 1.0, -1.0]);
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let mut bad = scaler();
        bad.scale[3] = 0.0;
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("feature 3"));
    }

    #[test]
    fn test_validate_rejects_wrong_width() {
        let mut bad = scaler();
        bad.mean.pop();
        assert!(bad.validate().is_err());
    }
}
