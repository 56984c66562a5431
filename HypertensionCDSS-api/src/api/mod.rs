pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;

use hypertension_cdss_domain::services::AssessmentServiceTrait;

use crate::config::AppConfig;

/// Create the application router
pub fn create_application(
    config: &AppConfig,
    assessment: Arc<dyn AssessmentServiceTrait>,
) -> Router {
    routes::create_app(config, assessment)
}
