//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the fiscal period calendar and evaluation logic
//! - Error-to-response mapping
//! - Response types

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use appraisal_core::evaluation::RankTable;
use appraisal_core::period::{Clock, PeriodCalendar};

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Period calendar; resolves "today" in the configured time zone.
    pub calendar: PeriodCalendar<Arc<dyn Clock>>,
    /// Reward table used for ranking.
    pub rank_table: Arc<RankTable>,
    /// Upper bound on periods returned by one listing request.
    pub max_periods: i32,
}

impl AppState {
    /// Creates application state.
    pub fn new(clock: Arc<dyn Clock>, rank_table: RankTable, max_periods: i32) -> Self {
        Self {
            calendar: PeriodCalendar::new(clock),
            rank_table: Arc::new(rank_table),
            max_periods,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
