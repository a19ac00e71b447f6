mod handlers;
mod state;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::geocode::{GeocodeProvider, MapboxProvider};

/// Router backed by the Mapbox provider described by `config`.
pub fn build_router(config: &Config) -> Router {
    router_with_provider(MapboxProvider::new(config))
}

pub fn router_with_provider(provider: impl GeocodeProvider + 'static) -> Router {
    let state = Arc::new(AppState {
        provider: Box::new(provider),
    });

    Router::new()
        .route("/{query}", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, config: &Config) -> std::io::Result<()> {
    let app = build_router(config);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, api_base = %config.api_base, "geocode-relay listening");

    axum::serve(listener, app).await
}
