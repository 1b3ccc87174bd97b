//! Core business logic for Appraisal.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `period` - Fiscal period calendar derived from a company's founding month
//! - `evaluation` - Weighted rubric scoring, roll-ups and the reward table
//! - `format` - Number, currency and date display formatting

pub mod evaluation;
pub mod format;
pub mod period;
