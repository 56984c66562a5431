// Repository module structure
pub mod errors;
mod model_file;

// Re-export commonly used types
pub use errors::ModelError;
pub use model_file::{ModelRepository, DEFAULT_MODEL_PATH};
