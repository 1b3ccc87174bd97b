//! Appraisal API Server
//!
//! Main entry point for the Appraisal backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use appraisal_api::{AppState, create_router};
use appraisal_core::evaluation::{RankTable, RankTier};
use appraisal_core::period::SystemClock;
use appraisal_shared::{AppConfig, LoggingConfig, RankTierConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    let tz = config.calendar.tz()?;
    let rank_table = build_rank_table(&config.evaluation.rank_tiers)?;
    info!(
        timezone = %tz,
        max_periods = config.calendar.max_periods,
        tiers = rank_table.tiers().len(),
        "Calendar configured"
    );

    // Create application state
    let state = AppState::new(
        Arc::new(SystemClock::new(tz)),
        rank_table,
        config.calendar.max_periods,
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` wins over the config filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_rank_table(tiers: &[RankTierConfig]) -> anyhow::Result<RankTable> {
    let tiers = tiers
        .iter()
        .map(|tier| RankTier {
            rank: tier.rank.clone(),
            min_score: tier.min_score,
            reward: tier.reward,
        })
        .collect();
    Ok(RankTable::new(tiers)?)
}
