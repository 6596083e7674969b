//! Courtside web server entry point.

use anyhow::Context;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use courtside_web::{cache, config::AppConfig, pricing, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside_web=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let state = AppState::new(config);

    // Warms the pricing cache on startup and refreshes it on the TTL
    // cadence. The task is owned here and dies with the process.
    tokio::spawn(cache::start_cache_warmer(
        state.cache.clone(),
        state.config.clone(),
    ));

    let app = Router::new()
        .route("/", get(routes::booking::page))
        .route("/booking", get(routes::booking::page))
        .nest("/api/pricing", pricing::router())
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr)
        .await
        .with_context(|| format!("binding {}", state.config.bind_addr))?;
    tracing::info!("Listening on {}", state.config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
