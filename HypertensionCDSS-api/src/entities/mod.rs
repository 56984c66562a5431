// Public entities for the Hypertension CDSS API
// These are the wire formats; domain types are converted at the boundary

// Prediction request and response bodies
pub mod prediction;

// Error body shared by every endpoint
pub mod common;
