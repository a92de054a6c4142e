use std::sync::Arc;

use tower_http::cors::CorsLayer;

use career_pilot::analysis::GeminiAnalyst;
use career_pilot::config::AppConfig;
use career_pilot::pipeline::SubmitPipeline;
use career_pilot::routes::{ApiState, api_routes};
use career_pilot::store::{LibSqlBackend, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🚀 CareerPilot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   API: http://0.0.0.0:{}/api/profile", config.port);

    let provider = Arc::new(GeminiAnalyst::new(
        config.api_key.clone(),
        config.model.clone(),
    ));

    let db_path = std::path::Path::new(&config.db_path);
    let store: Arc<dyn ProfileStore> = Arc::new(LibSqlBackend::new_local(db_path).await?);

    let pipeline = Arc::new(SubmitPipeline::new(provider, store.clone()));

    let app = api_routes(ApiState { pipeline, store }).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
