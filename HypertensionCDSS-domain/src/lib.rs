// Hypertension CDSS Domain
// This crate contains the clinical rules and the assessment workflow

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Health checks and system status
pub mod health;

// Re-export the classifier layer for convenience
pub use hypertension_cdss_data as data;
