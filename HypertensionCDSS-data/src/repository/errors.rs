use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading and evaluating classifier models
#[derive(Error, Debug)]
pub enum ModelError {
    /// No model file at the configured path
    #[error("Model not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The model file exists but could not be read
    #[error("Failed to read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file is not a valid model document
    #[error("Failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model document is well formed JSON but structurally unusable
    #[error("Invalid model: {0}")]
    Invalid(String),
}
