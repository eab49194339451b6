//! Everything the portfolio page derives from the holdings list, in one pass.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::charts::{
    allocation_series, holding_breakdown_series, performance_series, price_comparison_series,
    ChartSeries,
};
use super::holdings::{aggregate_totals, holding_metric, Holding, HoldingMetric, PortfolioTotals};
use crate::utils::time_utils::format_last_update;

/// A holding alongside the figures derived from it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HoldingView {
    #[serde(flatten)]
    pub holding: Holding,
    pub metric: HoldingMetric,
    pub breakdown: ChartSeries,
    pub price_comparison: ChartSeries,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioOverview {
    pub totals: PortfolioTotals,
    pub holdings: Vec<HoldingView>,
    pub allocation: ChartSeries,
    pub performance: ChartSeries,
}

impl PortfolioOverview {
    /// Builds the overview from scratch. `now` anchors the relative
    /// "last updated" labels.
    pub fn from_holdings(holdings: &[Holding], now: DateTime<Utc>) -> Self {
        let totals = aggregate_totals(holdings);
        let views = holdings
            .iter()
            .map(|h| HoldingView {
                holding: h.clone(),
                metric: holding_metric(h),
                breakdown: holding_breakdown_series(h),
                price_comparison: price_comparison_series(h),
                last_updated: format_last_update(h.last_price_at.as_deref(), now),
            })
            .collect();

        Self {
            totals,
            holdings: views,
            allocation: allocation_series(holdings),
            performance: performance_series(&totals),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
