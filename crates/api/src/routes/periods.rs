//! Fiscal period calendar routes.
//!
//! Every endpoint takes the company's `founding_date`; the service keeps no
//! per-company state.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{AppState, error::ApiError};
use appraisal_core::format::format_date_ja;
use appraisal_core::period::{
    MonthEntry, PeriodBounds, PeriodCalculator, PeriodInfo, QuarterGroup, labels,
};
use appraisal_shared::AppError;

/// Creates the period routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/periods", get(list_periods))
        .route("/periods/current", get(current_period))
        .route("/periods/{period_number}", get(period_bounds))
        .route("/periods/{period_number}/months", get(period_months))
        .route("/periods/{period_number}/quarters", get(period_quarters))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for resolving the current period.
#[derive(Debug, Deserialize)]
pub struct CurrentPeriodQuery {
    /// Company founding date (YYYY-MM-DD).
    pub founding_date: String,
    /// Date to resolve (defaults to today).
    pub target_date: Option<String>,
}

/// Query parameters for listing periods.
#[derive(Debug, Deserialize)]
pub struct PeriodListQuery {
    /// Company founding date (YYYY-MM-DD).
    pub founding_date: String,
    /// Number of periods to list (defaults to the current period).
    pub max_periods: Option<i32>,
}

/// Query parameters for a single period.
#[derive(Debug, Deserialize)]
pub struct FoundingQuery {
    /// Company founding date (YYYY-MM-DD).
    pub founding_date: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Response for the current period.
#[derive(Debug, Serialize)]
pub struct CurrentPeriodResponse {
    /// Date that was resolved.
    pub as_of: NaiveDate,
    /// Period details.
    #[serde(flatten)]
    pub period: PeriodInfo,
    /// Period display name.
    pub period_name: String,
    /// Display label for the start date.
    pub start_label: String,
    /// Display label for the end date.
    pub end_label: String,
    /// Month range of the period.
    pub range_label: String,
}

/// Response for a period listing.
#[derive(Debug, Serialize)]
pub struct PeriodListResponse {
    /// Periods in ascending order.
    pub periods: Vec<PeriodBounds>,
}

/// Response for a period's months.
#[derive(Debug, Serialize)]
pub struct MonthListResponse {
    /// Period number.
    pub period_number: i32,
    /// Months in calendar order.
    pub months: Vec<MonthEntry>,
}

/// Response for a period's quarters.
#[derive(Debug, Serialize)]
pub struct QuarterListResponse {
    /// Period number.
    pub period_number: i32,
    /// Quarters 1-4.
    pub quarters: Vec<QuarterGroup>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET `/periods/current` - Resolve the period containing a date.
async fn current_period(
    State(state): State<AppState>,
    Query(query): Query<CurrentPeriodQuery>,
) -> Result<Json<CurrentPeriodResponse>, ApiError> {
    let founding = PeriodCalculator::parse_date(&query.founding_date)?;
    let target = query
        .target_date
        .as_deref()
        .map(PeriodCalculator::parse_date)
        .transpose()?;
    let as_of = target.unwrap_or_else(|| state.calendar.today());

    let period = state.calendar.current_period(founding, Some(as_of))?;
    debug!(
        %founding,
        %as_of,
        period_number = period.period_number,
        current_month = period.current_month,
        "Resolved current period"
    );

    Ok(Json(CurrentPeriodResponse {
        as_of,
        period_name: labels::period_name(period.period_number),
        start_label: format_date_ja(period.start_date),
        end_label: format_date_ja(period.end_date),
        range_label: labels::period_range_label(period.start_date, period.end_date),
        period,
    }))
}

/// GET `/periods` - List periods from the first up to `max_periods`.
async fn list_periods(
    State(state): State<AppState>,
    Query(query): Query<PeriodListQuery>,
) -> Result<Json<PeriodListResponse>, ApiError> {
    let founding = PeriodCalculator::parse_date(&query.founding_date)?;

    if let Some(requested) = query.max_periods
        && requested > state.max_periods
    {
        return Err(too_many_periods(requested, state.max_periods));
    }

    let periods = state.calendar.periods(founding, query.max_periods)?;
    let listed = periods.last().map_or(0, |p| p.period_number);
    if listed > state.max_periods {
        return Err(too_many_periods(listed, state.max_periods));
    }

    info!(%founding, count = periods.len(), "Listed periods");
    Ok(Json(PeriodListResponse { periods }))
}

/// GET `/periods/{period_number}` - Bounds of one period.
async fn period_bounds(
    Path(period_number): Path<i32>,
    Query(query): Query<FoundingQuery>,
) -> Result<Json<PeriodBounds>, ApiError> {
    let founding = PeriodCalculator::parse_date(&query.founding_date)?;
    let bounds = PeriodCalculator::resolve_period_bounds(founding, period_number)?;
    Ok(Json(bounds))
}

/// GET `/periods/{period_number}/months` - The twelve months of a period.
async fn period_months(
    Path(period_number): Path<i32>,
    Query(query): Query<FoundingQuery>,
) -> Result<Json<MonthListResponse>, ApiError> {
    let founding = PeriodCalculator::parse_date(&query.founding_date)?;
    let months = PeriodCalculator::enumerate_months(founding, period_number)?;
    Ok(Json(MonthListResponse {
        period_number,
        months,
    }))
}

/// GET `/periods/{period_number}/quarters` - The four quarters of a period.
async fn period_quarters(
    Path(period_number): Path<i32>,
    Query(query): Query<FoundingQuery>,
) -> Result<Json<QuarterListResponse>, ApiError> {
    let founding = PeriodCalculator::parse_date(&query.founding_date)?;
    let quarters = PeriodCalculator::group_by_quarter(founding, period_number)?;
    Ok(Json(QuarterListResponse {
        period_number,
        quarters,
    }))
}

fn too_many_periods(requested: i32, limit: i32) -> ApiError {
    ApiError(AppError::Validation(format!(
        "cannot list {requested} periods, limit is {limit}"
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rstest::rstest;

    use crate::test_support::get;

    #[tokio::test]
    async fn test_current_period_with_target() {
        let (status, body) =
            get("/api/v1/periods/current?founding_date=2020-04-01&target_date=2020-07-15").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period_number"], 1);
        assert_eq!(body["current_month"], 4);
        assert_eq!(body["quarter_number"], 2);
        assert_eq!(body["start_date"], "2020-04-01");
        assert_eq!(body["end_date"], "2021-03-31");
        assert_eq!(body["period_name"], "第1期");
        assert_eq!(body["start_label"], "2020年4月1日");
        assert_eq!(body["range_label"], "2020年4月〜2021年3月");
        assert_eq!(body["as_of"], "2020-07-15");
    }

    #[tokio::test]
    async fn test_current_period_defaults_to_today() {
        // test clock is 2022-05-10
        let (status, body) = get("/api/v1/periods/current?founding_date=2020-04-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period_number"], 3);
        assert_eq!(body["as_of"], "2022-05-10");
    }

    #[tokio::test]
    async fn test_current_period_before_founding() {
        let (status, body) =
            get("/api/v1/periods/current?founding_date=2020-04-01&target_date=2019-12-31").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");
    }

    #[rstest]
    #[case("/api/v1/periods/current?founding_date=not-a-date")]
    #[case("/api/v1/periods/current?founding_date=2020-04-01&target_date=2020-02-30")]
    #[case("/api/v1/periods/0?founding_date=2020-04-01")]
    #[case("/api/v1/periods/-3/months?founding_date=2020-04-01")]
    #[case("/api/v1/periods?founding_date=2020-04-01&max_periods=0")]
    #[case("/api/v1/periods?founding_date=2020-04-01&max_periods=6")]
    #[tokio::test]
    async fn test_invalid_arguments(#[case] uri: &str) {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_periods() {
        let (status, body) = get("/api/v1/periods?founding_date=2020-04-01&max_periods=3").await;
        assert_eq!(status, StatusCode::OK);
        let periods = body["periods"].as_array().unwrap();
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0]["start_date"], "2020-04-01");
        assert_eq!(periods[1]["start_date"], "2021-04-01");
        assert_eq!(periods[2]["start_date"], "2022-04-01");
        assert_eq!(periods[2]["period_name"], "第3期");
    }

    #[tokio::test]
    async fn test_list_periods_defaults_to_current() {
        let (status, body) = get("/api/v1/periods?founding_date=2021-06-15").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["periods"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_periods_default_over_limit() {
        // limit in tests is 5; founding in 2010 means period 13 today
        let (status, _) = get("/api/v1/periods?founding_date=2010-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_period_bounds() {
        let (status, body) = get("/api/v1/periods/10?founding_date=2020/04/01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["start_date"], "2029-04-01");
        assert_eq!(body["end_date"], "2030-03-31");
    }

    #[tokio::test]
    async fn test_period_months() {
        let (status, body) = get("/api/v1/periods/1/months?founding_date=2020-04-01").await;
        assert_eq!(status, StatusCode::OK);
        let months = body["months"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0]["label"], "2020年4月");
        assert_eq!(months[11]["label"], "2021年3月");
        assert_eq!(months[11]["quarter_number"], 4);
    }

    #[tokio::test]
    async fn test_period_quarters() {
        let (status, body) = get("/api/v1/periods/2/quarters?founding_date=2020-04-01").await;
        assert_eq!(status, StatusCode::OK);
        let quarters = body["quarters"].as_array().unwrap();
        assert_eq!(quarters.len(), 4);
        assert_eq!(quarters[1]["quarter_name"], "第2四半期");
        assert_eq!(quarters[1]["months"][0]["label"], "2021年7月");
    }
}
