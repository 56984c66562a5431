use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use hypertension_cdss_api::api::{create_application, handlers::health};
use hypertension_cdss_api::AppConfig;
use hypertension_cdss_data::ModelRepository;
use hypertension_cdss_domain::services::{create_assessment_service, AssessmentServiceTrait};

/// The main entry point for the Hypertension CDSS API server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Reads and validates configuration
/// 4. Loads the classifier model, exiting if it is unavailable
/// 5. Creates and starts the Axum web application
/// 6. Handles graceful shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stdout),
        )
        .with(env_filter)
        .init();

    info!("Starting Hypertension CDSS API server");

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    if config.debug {
        warn!("Debug mode is on: internal error details are returned to clients");
    }

    let repository = ModelRepository::new(&config.model_path);
    let model = match repository.load() {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            error!("The server cannot make predictions without a model; exiting");
            std::process::exit(1);
        }
    };

    let assessment: Arc<dyn AssessmentServiceTrait> =
        Arc::new(create_assessment_service(Some(model)));
    if let Some(description) = assessment.model_description() {
        info!("Classifier: {}", description);
    }

    // Initialize server start time for uptime reporting in health checks
    health::initialize_server_start_time();

    let app = create_application(&config, assessment);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);
    info!("API documentation at http://{}/api-docs", addr);

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
