use rust_decimal::Decimal;
use serde::Serialize;

use super::{DashboardSummary, PortfolioSummary};
use crate::constants::{COLOR_BLUE, COLOR_GREEN, LABEL_GAINS, LABEL_INVESTED};
use crate::portfolio::{goals_series, ChartSeries, PortfolioTotals};

/// Invested-versus-gains split shown on the dashboard.
///
/// Unlike the portfolio page's performance chart this always renders both
/// slices once any holding exists, with losses clamped to a zero gain.
pub fn distribution_series(portfolio: &PortfolioSummary) -> ChartSeries {
    let mut series = ChartSeries::new();
    if portfolio.holdings_count == 0 {
        return series;
    }
    series.push(portfolio.total_investment, LABEL_INVESTED, COLOR_BLUE);
    series.push(
        portfolio.total_gain.max(Decimal::ZERO),
        LABEL_GAINS,
        COLOR_GREEN,
    );
    series
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub totals: PortfolioTotals,
    pub holdings_count: u32,
    pub distribution: ChartSeries,
    pub goals: ChartSeries,
    /// Passed through from the API as-is.
    pub goals_progress_percent: Decimal,
    pub active_goals: u32,
    pub completed_goals: u32,
}

impl DashboardView {
    pub fn from_summary(summary: &DashboardSummary) -> Self {
        Self {
            totals: PortfolioTotals::from(&summary.portfolio),
            holdings_count: summary.portfolio.holdings_count,
            distribution: distribution_series(&summary.portfolio),
            goals: goals_series(&summary.goals),
            goals_progress_percent: summary.goals.progress_percent,
            active_goals: summary.goals.active,
            completed_goals: summary.goals.completed,
        }
    }
}
