//! clearpoint-api - HTTP server for the clearpoint note classifier

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clearpoint_api::store::InMemoryNoteStore;
use clearpoint_api::{build_router, AppState};
use clearpoint_core::defaults;
use clearpoint_inference::ExtractionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging:
    //   LOG_FORMAT - "text" (default) or "json"
    //   RUST_LOG   - standard env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clearpoint_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let state = AppState {
        service: Arc::new(ExtractionService::from_env()),
        notes: Arc::new(InMemoryNoteStore::new()),
    };

    let app = build_router(state);

    let port = std::env::var("CLEARPOINT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults::SERVER_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("clearpoint-api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
