use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One owned investment position as returned by `GET /portfolio`.
///
/// `cost_basis` and `current_value` are trusted as supplied upstream; the
/// engine never recomputes them from `units` and prices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Holding {
    pub id: i64,
    pub symbol: String,
    pub asset_type: String,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub last_price: Decimal,
    /// ISO timestamp of the last price refresh, if any.
    #[serde(default)]
    pub last_price_at: Option<String>,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
}

impl Holding {
    /// Gain metrics for this holding against its own cost basis.
    pub fn metric(&self) -> HoldingMetric {
        super::holding_metric(self)
    }
}

/// Gain metrics derived from a single holding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HoldingMetric {
    pub gain: Decimal,
    pub gain_percent: Decimal,
    /// A zero gain counts as profit.
    pub is_profit: bool,
}

/// Portfolio-level totals, recomputed from the holdings on every call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioTotals {
    pub total_value: Decimal,
    pub total_investment: Decimal,
    pub total_gain: Decimal,
    pub gain_percent: Decimal,
}

impl PortfolioTotals {
    pub fn is_profit(&self) -> bool {
        self.total_gain >= Decimal::ZERO
    }
}
