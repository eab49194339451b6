//! Wealthdash Core - derived metrics, chart series, and risk scoring.
//!
//! This crate turns already-fetched dashboard records (holdings, goals,
//! questionnaire answers) into the totals, chart-ready series and risk
//! profile that the dashboard renders. It performs no I/O; fetching and
//! persisting are the caller's responsibility.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod portfolio;
pub mod profile;
pub mod risk;
pub mod utils;

// Re-export common types from portfolio and risk modules
pub use portfolio::*;
pub use risk::{QuizAnswers, RiskCategory, RiskScorer};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
