//! Builders that shape holdings, totals and goals into chart series.
//!
//! Every builder is pure and deterministic: identical input yields an
//! identical series, and the arguments are never mutated.

use log::debug;
use rust_decimal::Decimal;

use super::chart_model::{ChartPoint, ChartSeries};
use crate::constants::*;
use crate::goals::GoalsSummary;
use crate::portfolio::holdings::{difference, holding_metric, Holding, PortfolioTotals};

/// Palette color for the slice rendered at `position`.
pub fn palette_color(position: usize) -> &'static str {
    CHART_PALETTE[position % CHART_PALETTE.len()]
}

/// One slice per holding with a positive current value, labeled by symbol.
///
/// Point ids keep the holding's index in the input; colors cycle through
/// [`CHART_PALETTE`] by the slice's position in the rendered series.
pub fn allocation_series(holdings: &[Holding]) -> ChartSeries {
    let mut series = ChartSeries::new();
    for (idx, holding) in holdings.iter().enumerate() {
        let value = holding.current_value.max(Decimal::ZERO);
        if value <= Decimal::ZERO {
            debug!(
                "Dropping {} from allocation chart: current value {}",
                holding.symbol, holding.current_value
            );
            continue;
        }
        let color = palette_color(series.len());
        series.push_point(ChartPoint::new(idx, value, holding.symbol.clone(), color));
    }
    series
}

/// Invested-versus-gain breakdown of the whole portfolio.
///
/// Empty when nothing is invested. A zero gain renders a single
/// `Invested` slice; a loss renders `Current Value` and `Loss`.
pub fn performance_series(totals: &PortfolioTotals) -> ChartSeries {
    let mut series = ChartSeries::new();
    if totals.total_investment <= Decimal::ZERO {
        return series;
    }

    if totals.total_gain >= Decimal::ZERO {
        series.push(totals.total_investment, LABEL_INVESTED, COLOR_BLUE);
        if totals.total_gain > Decimal::ZERO {
            series.push(totals.total_gain, LABEL_GAINS, COLOR_GREEN);
        }
    } else {
        series.push(totals.total_value, LABEL_CURRENT_VALUE, COLOR_BLUE);
        series.push(totals.total_gain.abs(), LABEL_LOSS, COLOR_RED);
    }
    series
}

/// Saved-versus-remaining split across all goals.
///
/// Over-funded goals clamp `Remaining` at zero.
pub fn goals_series(goals: &GoalsSummary) -> ChartSeries {
    let mut series = ChartSeries::new();
    if goals.total == 0 {
        return series;
    }
    let remaining = difference(goals.total_target, goals.total_saved).max(Decimal::ZERO);
    series.push(goals.total_saved, LABEL_SAVED, COLOR_GREEN);
    series.push(remaining, LABEL_REMAINING, COLOR_SLATE);
    series
}

/// Invested, current and gain/loss bars for a single holding.
pub fn holding_breakdown_series(holding: &Holding) -> ChartSeries {
    let metric = holding_metric(holding);
    let mut series = ChartSeries::new();
    series.push(holding.cost_basis, LABEL_INVESTED, COLOR_BLUE);
    if metric.is_profit {
        series.push(holding.current_value, LABEL_CURRENT, COLOR_GREEN);
        series.push(metric.gain.abs(), LABEL_GAIN, COLOR_GREEN);
    } else {
        series.push(holding.current_value, LABEL_CURRENT, COLOR_AMBER);
        series.push(metric.gain.abs(), LABEL_LOSS, COLOR_RED);
    }
    series
}

/// Average buy price against last traded price for a single holding.
pub fn price_comparison_series(holding: &Holding) -> ChartSeries {
    let last_color = if holding.last_price >= holding.avg_buy_price {
        COLOR_GREEN
    } else {
        COLOR_RED
    };
    let mut series = ChartSeries::new();
    series.push(holding.avg_buy_price, LABEL_AVG_BUY, COLOR_AMBER);
    series.push(holding.last_price, LABEL_LAST_PRICE, last_color);
    series
}
