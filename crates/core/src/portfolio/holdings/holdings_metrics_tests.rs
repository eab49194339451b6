//! Tests for holding and portfolio gain metrics.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{
        aggregate_totals, difference, holding_metric, percent_of, sum_amounts, Holding,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, cost_basis: Decimal, current_value: Decimal) -> Holding {
        Holding {
            id: 1,
            symbol: symbol.to_string(),
            asset_type: "stock".to_string(),
            units: dec!(10),
            avg_buy_price: cost_basis / dec!(10),
            last_price: current_value / dec!(10),
            last_price_at: None,
            cost_basis,
            current_value,
        }
    }

    // ==================== aggregate_totals ====================

    #[test]
    fn test_aggregate_totals_empty_is_all_zero() {
        let totals = aggregate_totals(&[]);
        assert_eq!(totals.total_value, Decimal::ZERO);
        assert_eq!(totals.total_investment, Decimal::ZERO);
        assert_eq!(totals.total_gain, Decimal::ZERO);
        assert_eq!(totals.gain_percent, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_totals_sums_and_computes_gain_percent() {
        let holdings = vec![
            holding("INFY", dec!(1000), dec!(1200)),
            holding("TCS", dec!(3000), dec!(2800)),
        ];
        let totals = aggregate_totals(&holdings);

        assert_eq!(totals.total_value, dec!(4000));
        assert_eq!(totals.total_investment, dec!(4000));
        assert_eq!(totals.total_gain, dec!(0));
        assert_eq!(totals.gain_percent, dec!(0));
        assert!(totals.is_profit());
    }

    #[test]
    fn test_aggregate_totals_loss() {
        let holdings = vec![holding("HDFC", dec!(2000), dec!(1500))];
        let totals = aggregate_totals(&holdings);

        assert_eq!(totals.total_gain, dec!(-500));
        assert_eq!(totals.gain_percent, dec!(-25));
        assert!(!totals.is_profit());
    }

    #[test]
    fn test_aggregate_totals_zero_investment_guards_percent() {
        let holdings = vec![holding("GIFT", dec!(0), dec!(750))];
        let totals = aggregate_totals(&holdings);

        assert_eq!(totals.total_gain, dec!(750));
        assert_eq!(totals.gain_percent, Decimal::ZERO);
    }

    // ==================== holding_metric ====================

    #[test]
    fn test_holding_metric_zero_gain_is_profit() {
        let metric = holding_metric(&holding("AAPL", dec!(100), dec!(100)));
        assert_eq!(metric.gain, Decimal::ZERO);
        assert_eq!(metric.gain_percent, Decimal::ZERO);
        assert!(metric.is_profit);
    }

    #[test]
    fn test_holding_metric_gain_and_loss() {
        let up = holding_metric(&holding("AAPL", dec!(200), dec!(250)));
        assert_eq!(up.gain, dec!(50));
        assert_eq!(up.gain_percent, dec!(25));
        assert!(up.is_profit);

        let down = holding_metric(&holding("MSFT", dec!(400), dec!(300)));
        assert_eq!(down.gain, dec!(-100));
        assert_eq!(down.gain_percent, dec!(-25));
        assert!(!down.is_profit);
    }

    #[test]
    fn test_holding_metric_zero_cost_basis() {
        let metric = holding("BONUS", dec!(0), dec!(42)).metric();
        assert_eq!(metric.gain, dec!(42));
        assert_eq!(metric.gain_percent, Decimal::ZERO);
        assert!(metric.is_profit);
    }

    // ==================== percent_of ====================

    #[test]
    fn test_percent_of_guards_non_positive_base() {
        assert_eq!(percent_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(10), dec!(-5)), Decimal::ZERO);
        assert_eq!(percent_of(dec!(1), dec!(3)).round_dp(4), dec!(33.3333));
    }

    #[test]
    fn test_percent_of_overflow_falls_back_to_zero() {
        assert_eq!(percent_of(Decimal::MAX, dec!(0.0001)), Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_totals_saturates_instead_of_overflowing() {
        let json = r#"[
            {"id": 1, "symbol": "BIG", "asset_type": "stock", "units": 1,
             "avg_buy_price": 0, "last_price": 5e28, "cost_basis": 0, "current_value": 5e28},
            {"id": 2, "symbol": "BIGGER", "asset_type": "stock", "units": 1,
             "avg_buy_price": 0, "last_price": 5e28, "cost_basis": 0, "current_value": 5e28}
        ]"#;
        let holdings: Vec<Holding> = serde_json::from_str(json).unwrap();
        let totals = aggregate_totals(&holdings);

        assert_eq!(totals.total_value, Decimal::MAX);
        assert_eq!(totals.total_investment, Decimal::ZERO);
        assert_eq!(totals.total_gain, Decimal::MAX);
        assert_eq!(totals.gain_percent, Decimal::ZERO);
    }

    #[test]
    fn test_holding_metric_saturates_gain() {
        let metric = holding_metric(&holding("SHORT", Decimal::MAX, Decimal::MIN));
        assert_eq!(metric.gain, Decimal::MIN);
        assert!(!metric.is_profit);
    }

    #[test]
    fn test_sum_and_difference_saturate_at_bounds() {
        assert_eq!(sum_amounts([Decimal::MIN, Decimal::MIN]), Decimal::MIN);
        assert_eq!(sum_amounts([dec!(1.5), dec!(2.5)]), dec!(4));
        assert_eq!(sum_amounts(Vec::new()), Decimal::ZERO);
        assert_eq!(difference(Decimal::MAX, dec!(-1)), Decimal::MAX);
        assert_eq!(difference(dec!(10), dec!(4)), dec!(6));
    }

    #[test]
    fn test_holding_deserializes_api_payload() {
        let json = r#"{
            "id": 7,
            "symbol": "RELIANCE.NS",
            "asset_type": "stock",
            "units": 4,
            "avg_buy_price": 2450.5,
            "last_price": 2600.25,
            "last_price_at": "2024-03-01T10:15:00",
            "cost_basis": 9802.0,
            "current_value": 10401.0
        }"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.symbol, "RELIANCE.NS");
        assert_eq!(holding.units, dec!(4));
        assert_eq!(holding.current_value, dec!(10401));
        assert_eq!(holding.last_price_at.as_deref(), Some("2024-03-01T10:15:00"));
        assert_eq!(holding.metric().gain, dec!(599));
    }
}
