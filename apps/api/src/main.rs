mod config;
mod errors;
mod matching;
mod models;
mod providers;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::WeightedMatchScorer;
use crate::matching::weights::MatchWeights;
use crate::providers::fixtures::FixtureStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    // Seed candidates and jobs
    let store = Arc::new(FixtureStore::load(config.fixtures_path.as_deref())?);

    let weights = MatchWeights::default();
    let scorer = Arc::new(WeightedMatchScorer::new(weights));
    info!(
        "Match scorer ready (max {} points); min_score={} top_n={} pacing={:?}",
        weights.sum(),
        config.ranking.min_score,
        config.ranking.top_n,
        config.pacing
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
        candidates: store.clone(),
        jobs: store,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
