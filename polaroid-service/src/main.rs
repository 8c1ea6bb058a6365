use polaroid_service::config::PolaroidConfig;
use polaroid_service::services::init_metrics;
use polaroid_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT")
        .ok()
        .filter(|e| !e.trim().is_empty());
    init_tracing("polaroid-service", &log_level, otlp_endpoint.as_deref());

    let config = PolaroidConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start polaroid-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(
        port = app.port(),
        store_available = app.store().is_available(),
        "polaroid-service started"
    );

    app.run_until_stopped().await
}
