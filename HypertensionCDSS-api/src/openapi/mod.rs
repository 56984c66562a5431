use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::predict::predict,
    ),
    components(
        schemas(
            crate::entities::prediction::PredictionRequest,
            crate::entities::prediction::PredictionResponse,
            crate::entities::common::ErrorResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Service and model status"),
        (name = "prediction", description = "Hypertension risk assessment")
    ),
    info(
        title = "Hypertension CDSS API",
        description = "Clinical decision support for hypertension risk: classifier prediction, AHA/ACC blood pressure staging, risk factors and a confidence estimate",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
