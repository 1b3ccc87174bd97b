//! Evaluation scoring, roll-up and reward table routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};
use appraisal_core::evaluation::{
    CategoryScore, MonthlyScore, PeriodRollup, RankTier, RankedStaff, RubricCategory,
    ScoringService, StaffScore,
};
use appraisal_core::format::{format_percent, format_yen};
use appraisal_core::period::PeriodCalculator;

/// Creates the evaluation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/evaluations/score", post(score_evaluation))
        .route("/evaluations/rollup", post(rollup_scores))
        .route("/rank-table", get(get_rank_table))
        .route("/rank-table/rank", post(rank_staff))
}

// ============================================================================
// Requests
// ============================================================================

/// Request body for scoring one evaluation.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Rubric categories with weights.
    pub rubric: Vec<RubricCategory>,
    /// Raw score per category.
    pub scores: Vec<CategoryScore>,
}

/// Request body for rolling monthly scores up into a period.
#[derive(Debug, Deserialize)]
pub struct RollupRequest {
    /// Company founding date (YYYY-MM-DD).
    pub founding_date: String,
    /// Period to roll up.
    pub period_number: i32,
    /// Weighted score per month.
    pub monthly_scores: Vec<MonthlyScore>,
}

/// Request body for ranking staff.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Scores to rank.
    pub entries: Vec<StaffScore>,
}

// ============================================================================
// Responses
// ============================================================================

/// Response for a scored evaluation.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Weighted score (0-100).
    pub score: Decimal,
    /// Score formatted for display.
    pub formatted: String,
    /// Reward tier reached, if any.
    pub rank: Option<RankTierResponse>,
}

/// Reward tier with a display label.
#[derive(Debug, Serialize)]
pub struct RankTierResponse {
    /// Rank name.
    pub rank: String,
    /// Minimum score.
    pub min_score: Decimal,
    /// Reward amount.
    pub reward: Decimal,
    /// Reward formatted in yen.
    pub reward_label: String,
}

impl From<&RankTier> for RankTierResponse {
    fn from(tier: &RankTier) -> Self {
        Self {
            rank: tier.rank.clone(),
            min_score: tier.min_score,
            reward: tier.reward,
            reward_label: format_yen(tier.reward),
        }
    }
}

/// Response for the reward table.
#[derive(Debug, Serialize)]
pub struct RankTableResponse {
    /// Tiers, highest threshold first.
    pub tiers: Vec<RankTierResponse>,
}

/// Response for a ranking.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    /// Staff in ranked order.
    pub ranking: Vec<RankedStaff>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/evaluations/score` - Weighted score and reward tier.
async fn score_evaluation(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let score = ScoringService::weighted_score(&payload.rubric, &payload.scores)?;
    let rank = state.rank_table.lookup(score).map(RankTierResponse::from);

    info!(
        %score,
        rank = rank.as_ref().map_or("-", |r| r.rank.as_str()),
        "Evaluation scored"
    );

    Ok(Json(ScoreResponse {
        score,
        formatted: format_percent(score, 2),
        rank,
    }))
}

/// POST `/evaluations/rollup` - Quarterly and annual averages for a period.
async fn rollup_scores(
    Json(payload): Json<RollupRequest>,
) -> Result<Json<PeriodRollup>, ApiError> {
    let founding = PeriodCalculator::parse_date(&payload.founding_date)?;
    let rollup =
        ScoringService::rollup(founding, payload.period_number, &payload.monthly_scores)?;

    info!(
        %founding,
        period_number = rollup.period_number,
        months_scored = rollup.months_scored,
        "Scores rolled up"
    );

    Ok(Json(rollup))
}

/// GET `/rank-table` - Configured reward tiers.
async fn get_rank_table(State(state): State<AppState>) -> Json<RankTableResponse> {
    Json(RankTableResponse {
        tiers: state
            .rank_table
            .tiers()
            .iter()
            .map(RankTierResponse::from)
            .collect(),
    })
}

/// POST `/rank-table/rank` - Rank staff by score.
async fn rank_staff(
    State(state): State<AppState>,
    Json(payload): Json<RankRequest>,
) -> Json<RankingResponse> {
    let ranking = state.rank_table.rank_staff(payload.entries);
    info!(count = ranking.len(), "Staff ranked");
    Json(RankingResponse { ranking })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{get, post};

    #[tokio::test]
    async fn test_score_evaluation() {
        let (status, body) = post(
            "/api/v1/evaluations/score",
            json!({
                "rubric": [
                    {"key": "results", "name": "Results", "weight": 2, "max_score": 5},
                    {"key": "teamwork", "name": "Teamwork", "weight": "1", "max_score": 10}
                ],
                "scores": [
                    {"category_key": "results", "score": 5},
                    {"category_key": "teamwork", "score": 10}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], "100");
        assert_eq!(body["formatted"], "100.00%");
        assert_eq!(body["rank"]["rank"], "S");
        assert_eq!(body["rank"]["reward_label"], "¥100,000");
    }

    #[tokio::test]
    async fn test_score_evaluation_rejects_unknown_category() {
        let (status, body) = post(
            "/api/v1/evaluations/score",
            json!({
                "rubric": [{"key": "results", "name": "Results", "weight": 1, "max_score": 5}],
                "scores": [{"category_key": "other", "score": 1}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rollup() {
        let (status, body) = post(
            "/api/v1/evaluations/rollup",
            json!({
                "founding_date": "2020-04-01",
                "period_number": 1,
                "monthly_scores": [
                    {"year": 2020, "month": 4, "score": 80},
                    {"year": 2020, "month": 5, "score": 90},
                    {"year": 2021, "month": 1, "score": 70}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period_name"], "第1期");
        assert_eq!(body["quarters"][0]["average"], "85");
        assert_eq!(body["quarters"][1]["average"], serde_json::Value::Null);
        assert_eq!(body["quarters"][3]["average"], "70");
        assert_eq!(body["annual_average"], "80");
        assert_eq!(body["months_scored"], 3);
    }

    #[tokio::test]
    async fn test_rollup_invalid_period() {
        let (status, _) = post(
            "/api/v1/evaluations/rollup",
            json!({
                "founding_date": "2020-04-01",
                "period_number": 0,
                "monthly_scores": []
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_evaluation_overflow_is_bad_request() {
        let max = rust_decimal::Decimal::MAX.to_string();
        let (status, body) = post(
            "/api/v1/evaluations/score",
            json!({
                "rubric": [{"key": "a", "name": "A", "weight": max, "max_score": max}],
                "scores": [{"category_key": "a", "score": max}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rollup_rejects_invalid_month() {
        let (status, body) = post(
            "/api/v1/evaluations/rollup",
            json!({
                "founding_date": "2020-04-01",
                "period_number": 1,
                "monthly_scores": [{"year": 2020, "month": 13, "score": 80}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_table() {
        let (status, body) = get("/api/v1/rank-table").await;
        assert_eq!(status, StatusCode::OK);
        let tiers = body["tiers"].as_array().unwrap();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0]["rank"], "S");
        assert_eq!(tiers[1]["reward_label"], "¥50,000");
    }

    #[tokio::test]
    async fn test_rank_staff() {
        let (status, body) = post(
            "/api/v1/rank-table/rank",
            json!({
                "entries": [
                    {"staff_id": "u-2", "score": 85},
                    {"staff_id": "u-1", "score": 92.5},
                    {"staff_id": "u-3", "score": 85}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ranking = body["ranking"].as_array().unwrap();
        assert_eq!(ranking[0]["staff_id"], "u-1");
        assert_eq!(ranking[0]["tier"]["rank"], "S");
        assert_eq!(ranking[1]["position"], 2);
        assert_eq!(ranking[2]["position"], 2);
        assert_eq!(ranking[2]["staff_id"], "u-3");
    }
}
