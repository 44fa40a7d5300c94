use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use decision_compass::adapters::generator::TemplateResponder;
use decision_compass::adapters::http::chat::{chat_router, ChatAppState};
use decision_compass::adapters::storage::FileStateStorage;
use decision_compass::config::AppConfig;
use decision_compass::ports::{ResponseGenerator, StateStorage};
use decision_compass::store::ChatStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let storage: Arc<dyn StateStorage> =
        Arc::new(FileStateStorage::new(config.storage.data_dir.clone()));
    let store = Arc::new(ChatStore::load(storage).await);
    let generator: Arc<dyn ResponseGenerator> = Arc::new(TemplateResponder::new());

    let state = ChatAppState::new(store, generator);

    let app = chat_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "decision-compass listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the CORS layer from configuration; permissive when no origins are
/// configured.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
