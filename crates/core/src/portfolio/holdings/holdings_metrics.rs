use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::holdings_model::{Holding, HoldingMetric, PortfolioTotals};

/// Returns `amount` as a percentage of `base`.
///
/// Zero-guarded: a non-positive base yields `0`, as does a ratio that would
/// overflow the decimal range.
pub fn percent_of(amount: Decimal, base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// Adds up `amounts`, saturating at the decimal bounds instead of
/// overflowing.
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    let mut saturated = false;
    let total = amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or_else(|| {
            saturated = true;
            acc.saturating_add(amount)
        })
    });
    if saturated {
        warn!("Amount sum overflowed the decimal range, saturated at {}", total);
    }
    total
}

/// `minuend - subtrahend`, saturating at the decimal bounds.
pub fn difference(minuend: Decimal, subtrahend: Decimal) -> Decimal {
    minuend.checked_sub(subtrahend).unwrap_or_else(|| {
        warn!(
            "Difference {} - {} overflowed the decimal range, saturating",
            minuend, subtrahend
        );
        minuend.saturating_sub(subtrahend)
    })
}

/// Sums current value and cost basis across all holdings.
///
/// Order-independent; an empty slice yields all-zero totals. Totals beyond
/// the decimal range saturate rather than panic.
pub fn aggregate_totals(holdings: &[Holding]) -> PortfolioTotals {
    let total_value = sum_amounts(holdings.iter().map(|h| h.current_value));
    let total_investment = sum_amounts(holdings.iter().map(|h| h.cost_basis));
    let total_gain = difference(total_value, total_investment);
    let gain_percent = percent_of(total_gain, total_investment);

    debug!(
        "Aggregated {} holdings: value={}, invested={}, gain={} ({}%)",
        holdings.len(),
        total_value,
        total_investment,
        total_gain,
        gain_percent
    );

    PortfolioTotals {
        total_value,
        total_investment,
        total_gain,
        gain_percent,
    }
}

pub fn holding_metric(holding: &Holding) -> HoldingMetric {
    let gain = difference(holding.current_value, holding.cost_basis);
    HoldingMetric {
        gain,
        gain_percent: percent_of(gain, holding.cost_basis),
        is_profit: gain >= Decimal::ZERO,
    }
}
