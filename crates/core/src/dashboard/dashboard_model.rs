use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::GoalsSummary;
use crate::portfolio::PortfolioTotals;

/// Portfolio figures precomputed by `GET /dashboard/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_investment: Decimal,
    pub total_gain: Decimal,
    pub gain_percent: Decimal,
    pub holdings_count: u32,
}

impl From<&PortfolioSummary> for PortfolioTotals {
    fn from(summary: &PortfolioSummary) -> Self {
        PortfolioTotals {
            total_value: summary.total_value,
            total_investment: summary.total_investment,
            total_gain: summary.total_gain,
            gain_percent: summary.gain_percent,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub portfolio: PortfolioSummary,
    pub goals: GoalsSummary,
}
