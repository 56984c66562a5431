use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use hypertension_cdss_domain::health::{
    ComponentStatus as DomainComponentStatus, HealthComponent as DomainHealthComponent,
    SystemStatus,
};

use crate::api::routes::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" when the model is loaded, "error" otherwise
    pub status: String,
    /// Whether a classifier is available
    pub model_loaded: bool,
    /// Application version from the Cargo manifest
    pub version: String,
    /// Unix timestamp of the response
    pub timestamp: i64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Per-component status
    pub components: ComponentStatus,
    /// Deployment environment
    pub environment: String,
}

/// Status of individual system components
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Classifier status
    pub model: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// "ok" or "error"
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

static SERVER_START_TIME: OnceCell<DateTime<Utc>> = OnceCell::new();

/// Record the server start time; later calls keep the first value
pub fn initialize_server_start_time() {
    let _ = SERVER_START_TIME.set(Utc::now());
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Model loaded and API healthy", body = HealthResponse),
        (status = 500, description = "Model not loaded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    info!("Health check requested");

    let now = Utc::now();
    let uptime = SERVER_START_TIME
        .get()
        .and_then(|start| (now - *start).num_seconds().try_into().ok());

    let system_health = state.health.get_system_health().await;

    let status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Unhealthy => "error",
    };

    let component = |name: &str| {
        system_health
            .components
            .get(name)
            .map(map_component)
            .unwrap_or_else(|| ComponentHealthStatus {
                status: "error".to_string(),
                message: Some(format!("No {} component reported", name)),
            })
    };

    let response = HealthResponse {
        status: status.to_string(),
        model_loaded: state.assessment.model_loaded(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now.timestamp(),
        uptime,
        components: ComponentStatus {
            model: component("model"),
            api: component("api"),
        },
        environment: state.environment.clone(),
    };

    let code = match system_health.status {
        SystemStatus::Healthy => StatusCode::OK,
        SystemStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (code, Json(response))
}

fn map_component(component: &DomainHealthComponent) -> ComponentHealthStatus {
    let status = match component.status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Unhealthy => "error",
    };

    ComponentHealthStatus {
        status: status.to_string(),
        message: component.details.clone(),
    }
}
