//! Rank-based reward table.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::EvaluationError;
use super::types::{RankTier, RankedStaff, StaffScore};

/// Reward tiers ordered from the highest threshold down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    tiers: Vec<RankTier>,
}

impl RankTable {
    /// Builds a table, sorting tiers by descending `min_score`.
    ///
    /// Rejects empty tables, duplicate thresholds or rank names, and
    /// negative rewards.
    pub fn new(mut tiers: Vec<RankTier>) -> Result<Self, EvaluationError> {
        if tiers.is_empty() {
            return Err(EvaluationError::InvalidRankTable(
                "at least one tier is required".to_string(),
            ));
        }

        tiers.sort_by(|a, b| b.min_score.cmp(&a.min_score));

        if let Some(pair) = tiers.windows(2).find(|w| w[0].min_score == w[1].min_score) {
            return Err(EvaluationError::InvalidRankTable(format!(
                "ranks {} and {} share threshold {}",
                pair[0].rank, pair[1].rank, pair[0].min_score
            )));
        }

        let mut names = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            if !names.insert(tier.rank.as_str()) {
                return Err(EvaluationError::InvalidRankTable(format!(
                    "duplicate rank {}",
                    tier.rank
                )));
            }
            if tier.reward < Decimal::ZERO {
                return Err(EvaluationError::InvalidRankTable(format!(
                    "rank {} has a negative reward",
                    tier.rank
                )));
            }
        }

        Ok(Self { tiers })
    }

    /// Tiers, highest threshold first.
    #[must_use]
    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// Highest tier whose threshold the score reaches.
    #[must_use]
    pub fn lookup(&self, score: Decimal) -> Option<&RankTier> {
        self.tiers.iter().find(|tier| tier.min_score <= score)
    }

    /// Orders staff by score (ties broken by id) and assigns competition
    /// positions: equal scores share a position and the next one skips.
    #[must_use]
    pub fn rank_staff(&self, mut entries: Vec<StaffScore>) -> Vec<RankedStaff> {
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.staff_id.cmp(&b.staff_id))
        });

        let mut ranked = Vec::with_capacity(entries.len());
        let mut previous: Option<Decimal> = None;
        let mut position = 0;

        for (index, entry) in entries.into_iter().enumerate() {
            if previous != Some(entry.score) {
                position = index + 1;
                previous = Some(entry.score);
            }
            ranked.push(RankedStaff {
                position,
                tier: self.lookup(entry.score).cloned(),
                staff_id: entry.staff_id,
                score: entry.score,
            });
        }

        ranked
    }
}
