//! API route definitions.

use axum::{Router, http::Uri};

use crate::{AppState, error::ApiError};
use appraisal_shared::AppError;

pub mod evaluations;
pub mod health;
pub mod periods;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(periods::routes())
        .merge(evaluations::routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(uri.path().to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_support::get;

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get("/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
