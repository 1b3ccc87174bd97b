//! Weighted rubric scoring and period roll-ups.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::EvaluationError;
use super::types::{CategoryScore, MonthlyScore, PeriodRollup, QuarterRollup, RubricCategory};
use crate::period::PeriodCalculator;

/// Service for turning raw category scores into comparable figures.
pub struct ScoringService;

impl ScoringService {
    /// Computes the weighted score of one evaluation, normalized to 0-100.
    ///
    /// Each category contributes `weight * score / max_score`; the sum is
    /// divided by the total weight. Rounded to 2 decimal places.
    pub fn weighted_score(
        rubric: &[RubricCategory],
        scores: &[CategoryScore],
    ) -> Result<Decimal, EvaluationError> {
        for category in rubric {
            if category.weight < Decimal::ZERO {
                return Err(EvaluationError::InvalidCategory {
                    key: category.key.clone(),
                    reason: "weight cannot be negative".to_string(),
                });
            }
            if category.max_score <= Decimal::ZERO {
                return Err(EvaluationError::InvalidCategory {
                    key: category.key.clone(),
                    reason: "max score must be positive".to_string(),
                });
            }
        }

        let total_weight = Self::checked_sum(rubric.iter().map(|c| c.weight))?;
        if total_weight <= Decimal::ZERO {
            return Err(EvaluationError::EmptyRubric);
        }

        let mut by_key: HashMap<&str, Decimal> = HashMap::with_capacity(scores.len());
        for score in scores {
            if !rubric.iter().any(|c| c.key == score.category_key) {
                return Err(EvaluationError::UnknownCategory(score.category_key.clone()));
            }
            if by_key
                .insert(score.category_key.as_str(), score.score)
                .is_some()
            {
                return Err(EvaluationError::DuplicateScore(score.category_key.clone()));
            }
        }

        let mut weighted = Decimal::ZERO;
        for category in rubric {
            let score = *by_key
                .get(category.key.as_str())
                .ok_or_else(|| EvaluationError::MissingScore(category.key.clone()))?;

            if score < Decimal::ZERO || score > category.max_score {
                return Err(EvaluationError::ScoreOutOfRange {
                    key: category.key.clone(),
                    score,
                    max: category.max_score,
                });
            }

            let contribution = category
                .weight
                .checked_mul(score)
                .and_then(|v| v.checked_div(category.max_score))
                .ok_or(EvaluationError::Overflow)?;
            weighted = weighted
                .checked_add(contribution)
                .ok_or(EvaluationError::Overflow)?;
        }

        weighted
            .checked_div(total_weight)
            .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED))
            .map(|v| v.round_dp(2))
            .ok_or(EvaluationError::Overflow)
    }

    /// Rolls monthly scores up into quarterly and annual averages for one
    /// period. Months outside the period are ignored; months that are not
    /// a calendar month (outside 1-12) are rejected.
    pub fn rollup(
        founding: NaiveDate,
        period_number: i32,
        monthly: &[MonthlyScore],
    ) -> Result<PeriodRollup, EvaluationError> {
        let bounds = PeriodCalculator::resolve_period_bounds(founding, period_number)?;
        let quarters = PeriodCalculator::group_by_quarter(founding, period_number)?;

        let mut by_month: HashMap<(i32, u32), Decimal> = HashMap::with_capacity(monthly.len());
        for entry in monthly {
            if !(1..=12).contains(&entry.month) {
                return Err(EvaluationError::InvalidMonth {
                    year: entry.year,
                    month: entry.month,
                });
            }
            if by_month.insert((entry.year, entry.month), entry.score).is_some() {
                return Err(EvaluationError::DuplicateMonth {
                    year: entry.year,
                    month: entry.month,
                });
            }
        }

        let mut in_period = Vec::new();
        let quarters = quarters
            .into_iter()
            .map(|quarter| -> Result<QuarterRollup, EvaluationError> {
                let scores: Vec<Decimal> = quarter
                    .months
                    .iter()
                    .filter_map(|m| by_month.get(&(m.year, m.month)).copied())
                    .collect();
                in_period.extend_from_slice(&scores);

                Ok(QuarterRollup {
                    quarter_number: quarter.quarter_number,
                    quarter_name: quarter.quarter_name,
                    average: Self::average(&scores)?,
                    months_scored: scores.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PeriodRollup {
            period_number: bounds.period_number,
            period_name: bounds.period_name,
            quarters,
            annual_average: Self::average(&in_period)?,
            months_scored: in_period.len(),
        })
    }

    /// Mean rounded to 2 decimal places, `None` for no values.
    fn average(values: &[Decimal]) -> Result<Option<Decimal>, EvaluationError> {
        if values.is_empty() {
            return Ok(None);
        }
        let sum = Self::checked_sum(values.iter().copied())?;
        sum.checked_div(Decimal::from(values.len()))
            .map(|mean| Some(mean.round_dp(2)))
            .ok_or(EvaluationError::Overflow)
    }

    fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Result<Decimal, EvaluationError> {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .ok_or(EvaluationError::Overflow)
    }
}

