//! Holdings module - holding records and derived gain metrics.

mod holdings_metrics;
mod holdings_model;

pub use holdings_metrics::{aggregate_totals, difference, holding_metric, percent_of, sum_amounts};
pub use holdings_model::{Holding, HoldingMetric, PortfolioTotals};

#[cfg(test)]
mod holdings_metrics_tests;
