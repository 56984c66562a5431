use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use hypertension_cdss_domain::health::{HealthService, HealthServiceTrait};
use hypertension_cdss_domain::services::AssessmentServiceTrait;

use crate::api::error::ApiError;
use crate::api::handlers::{health, predict};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub assessment: Arc<dyn AssessmentServiceTrait>,
    pub health: Arc<dyn HealthServiceTrait>,
    /// Include internal error details in responses
    pub debug: bool,
    pub environment: String,
}

impl AppState {
    pub fn new(config: &AppConfig, assessment: Arc<dyn AssessmentServiceTrait>) -> Self {
        let health: Arc<dyn HealthServiceTrait> = Arc::new(HealthService::new(assessment.clone()));
        Self {
            assessment,
            health,
            debug: config.debug,
            environment: config.environment.clone(),
        }
    }
}

/// Create the application router
pub fn create_app(config: &AppConfig, assessment: Arc<dyn AssessmentServiceTrait>) -> Router {
    debug!("Creating application router");

    let state = AppState::new(config, assessment);
    create_router(state, cors_layer(&config.cors_origins))
}

/// Assemble routes, documentation and middleware around `state`
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/predict", post(predict::predict));

    debug!("API routes configured");

    Router::new()
        .nest("/api", api_routes)
        .merge(configure_swagger_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for the configured origins; unparseable origins are skipped
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
