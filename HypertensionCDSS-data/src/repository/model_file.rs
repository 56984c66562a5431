use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ModelError;
use crate::model::PipelineModel;

/// Model location used when no path is configured
pub const DEFAULT_MODEL_PATH: &str = "model/cdss_model.json";

/// Reads pipeline models from a JSON file on disk
#[derive(Debug, Clone)]
pub struct ModelRepository {
    path: PathBuf,
}

impl Default for ModelRepository {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

impl ModelRepository {
    /// Create a repository for the model file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a model file is present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load and validate the model
    pub fn load(&self) -> Result<PipelineModel, ModelError> {
        debug!("Loading model from {}", self.path.display());

        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ModelError::NotFound(self.path.clone())
            } else {
                ModelError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let model = Self::parse(&raw)?;

        info!(
            path = %self.path.display(),
            nodes = model.tree.nodes.len(),
            "Model loaded successfully"
        );

        Ok(model)
    }

    /// Parse and validate a model document
    pub fn parse(raw: &str) -> Result<PipelineModel, ModelError> {
        let model: PipelineModel = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassifierTrait, FeatureVector};
    use std::io::Write;

    const MODEL_JSON: &str = r#"{
        "format_version": 1,
        "feature_names": ["age", "bmi", "cholesterol", "systolic", "diastolic"],
        "classes": [0, 1],
        "scaler": {
            "mean": [50.0, 26.0, 215.0, 135.0, 84.0],
            "scale": [10.0, 4.0, 40.0, 25.0, 12.0]
        },
        "tree": {
            "nodes": [
                {"kind": "split", "feature": 3, "threshold": 0.0, "left": 1, "right": 2},
                {"kind": "leaf", "counts": [40.0, 0.0]},
                {"kind": "leaf", "counts": [2.0, 38.0]}
            ]
        }
    }"#;

    #[test]
    fn test_load_model_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MODEL_JSON.as_bytes()).unwrap();

        let repo = ModelRepository::new(file.path());
        assert!(repo.exists());

        let model = repo.load().unwrap();
        let output = model
            .predict(&FeatureVector::new(65.0, 32.0, 250.0, 150.0, 95.0))
            .unwrap();
        assert_eq!(output.label, 1);
        assert_eq!(output.probabilities, [0.05, 0.95]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ModelRepository::new(dir.path().join("missing.json"));

        assert!(!repo.exists());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
        assert!(err.to_string().starts_with("Model not found at"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ModelRepository::parse("not json").unwrap_err(),
            ModelError::Parse(_)
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_structure() {
        let broken = MODEL_JSON.replace("\"right\": 2", "\"right\": 9");
        assert!(matches!(
            ModelRepository::parse(&broken).unwrap_err(),
            ModelError::Invalid(_)
        ));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(ModelRepository::default().path(), Path::new(DEFAULT_MODEL_PATH));
    }
}
