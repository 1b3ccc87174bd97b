//! Staff evaluation scoring, roll-ups and rewards.

pub mod error;
pub mod rank;
pub mod scoring;
pub mod types;


pub use error::EvaluationError;
pub use rank::RankTable;
pub use scoring::ScoringService;
pub use types::{
    CategoryScore, MonthlyScore, PeriodRollup, QuarterRollup, RankTier, RankedStaff,
    RubricCategory, StaffScore,
};
