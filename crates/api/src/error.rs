//! Mapping from domain errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use appraisal_core::evaluation::EvaluationError;
use appraisal_core::period::PeriodError;
use appraisal_shared::AppError;

/// Error returned by handlers; renders as `{"error", "message"}` JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = self.0.error_code();
        let message = self.0.to_string();

        warn!(status = status.as_u16(), code, %message, "Request rejected");

        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<PeriodError> for ApiError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::InvalidArgument(message) => Self(AppError::Validation(message)),
            e @ PeriodError::PreFoundingDate { .. } => Self(AppError::BusinessRule(e.to_string())),
        }
    }
}

impl From<EvaluationError> for ApiError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::Period(e) => e.into(),
            e => Self(AppError::Validation(e.to_string())),
        }
    }
}
