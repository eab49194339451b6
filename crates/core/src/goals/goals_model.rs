//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate goal figures as returned by `GET /dashboard/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalsSummary {
    pub total: u32,
    pub active: u32,
    pub completed: u32,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    /// Computed upstream and passed through untouched.
    pub progress_percent: Decimal,
}
