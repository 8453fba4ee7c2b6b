pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::races::RaceStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub races: Arc<RaceStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            races: Arc::new(RaceStore::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Typing test routes
        .route("/api/score", post(routes::typing::score))
        .route("/api/autocorrect", post(routes::typing::autocorrect))
        // Race routes
        .route("/api/races", post(routes::races::create))
        .route("/api/races/:id", get(routes::races::get))
        .route("/api/races/:id/progress", post(routes::races::progress))
        .route("/api/races/:id/finish", post(routes::races::finish))
        .route("/api/races/:id/fastest", get(routes::races::fastest))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        "Autocorrect using {} with limit {}",
        config.autocorrect.algorithm.as_str(),
        config.autocorrect.limit
    );

    let addr = config.addr();
    let app = build_router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
