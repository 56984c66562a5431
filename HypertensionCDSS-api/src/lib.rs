// HypertensionCDSS-api lib.rs
//
// HTTP surface of the Hypertension CDSS: configuration, routes, handlers
// and the OpenAPI document.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::create_application;
pub use config::AppConfig;
