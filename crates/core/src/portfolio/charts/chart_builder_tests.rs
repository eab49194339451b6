//! Tests for the chart series builders.

#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::goals::GoalsSummary;
    use crate::portfolio::charts::{
        allocation_series, goals_series, holding_breakdown_series, palette_color,
        performance_series, price_comparison_series,
    };
    use crate::portfolio::holdings::{Holding, PortfolioTotals};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(idx: i64, symbol: &str, current_value: Decimal) -> Holding {
        Holding {
            id: idx,
            symbol: symbol.to_string(),
            asset_type: "stock".to_string(),
            units: dec!(1),
            avg_buy_price: dec!(100),
            last_price: current_value,
            last_price_at: None,
            cost_basis: dec!(100),
            current_value,
        }
    }

    fn totals(total_value: Decimal, total_investment: Decimal) -> PortfolioTotals {
        PortfolioTotals {
            total_value,
            total_investment,
            total_gain: total_value - total_investment,
            gain_percent: Decimal::ZERO,
        }
    }

    fn goals(total: u32, saved: Decimal, target: Decimal) -> GoalsSummary {
        GoalsSummary {
            total,
            active: total,
            completed: 0,
            total_saved: saved,
            total_target: target,
            progress_percent: dec!(55.5),
        }
    }

    // ==================== allocation_series ====================

    #[test]
    fn test_allocation_series_empty_input() {
        assert!(allocation_series(&[]).is_empty());
    }

    #[test]
    fn test_allocation_series_palette_cycles_after_seven() {
        let holdings: Vec<Holding> = (0..8)
            .map(|i| holding(i, &format!("SYM{}", i), dec!(10) + Decimal::from(i)))
            .collect();
        let series = allocation_series(&holdings);

        assert_eq!(series.len(), 8);
        assert_eq!(series.points()[0].color, series.points()[7].color);
        assert_eq!(series.points()[0].color, "#3b82f6");
        assert_eq!(series.points()[6].color, "#f97316");
        assert_eq!(series.points()[3].label, "SYM3");
        assert_eq!(palette_color(14), palette_color(0));
    }

    #[test]
    fn test_allocation_series_drops_zero_and_negative_values() {
        let holdings = vec![
            holding(0, "AAA", dec!(500)),
            holding(1, "ZERO", dec!(0)),
            holding(2, "NEG", dec!(-20)),
            holding(3, "BBB", dec!(250)),
        ];
        let series = allocation_series(&holdings);

        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["AAA", "BBB"]);
        // ids keep the input index, colors follow the rendered position
        assert_eq!(series.points()[1].id, 3);
        assert_eq!(series.points()[1].color, CHART_PALETTE[1]);
        assert_eq!(series.total(), dec!(750));
    }

    #[test]
    fn test_allocation_series_is_deterministic() {
        let holdings = vec![holding(0, "AAA", dec!(1)), holding(1, "BBB", dec!(2))];
        assert_eq!(allocation_series(&holdings), allocation_series(&holdings));
    }

    // ==================== performance_series ====================

    #[test]
    fn test_performance_series_zero_investment_is_empty() {
        assert!(performance_series(&totals(dec!(500), dec!(0))).is_empty());
        assert!(performance_series(&totals(dec!(0), dec!(0))).is_empty());
        assert!(performance_series(&PortfolioTotals::default()).is_empty());
    }

    #[test]
    fn test_performance_series_zero_gain_has_single_slice() {
        let series = performance_series(&totals(dec!(100), dec!(100)));
        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].label, LABEL_INVESTED);
        assert_eq!(series.points()[0].value, dec!(100));
        assert!(series.get(LABEL_GAINS).is_none());
    }

    #[test]
    fn test_performance_series_gain() {
        let series = performance_series(&totals(dec!(130), dec!(100)));
        assert_eq!(series.len(), 2);
        let gains = series.get(LABEL_GAINS).unwrap();
        assert_eq!(gains.value, dec!(30));
        assert_eq!(gains.id, 1);
        assert_eq!(gains.color, COLOR_GREEN);
    }

    #[test]
    fn test_performance_series_loss() {
        let series = performance_series(&totals(dec!(80), dec!(100)));
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec![LABEL_CURRENT_VALUE, LABEL_LOSS]);
        assert_eq!(series.points()[0].value, dec!(80));
        assert_eq!(series.points()[1].value, dec!(20));
        assert_eq!(series.points()[1].color, COLOR_RED);
    }

    // ==================== goals_series ====================

    #[test]
    fn test_goals_series_no_goals_is_empty() {
        assert!(goals_series(&goals(0, dec!(100), dec!(200))).is_empty());
    }

    #[test]
    fn test_goals_series_remaining() {
        let series = goals_series(&goals(2, dec!(40), dec!(100)));
        assert_eq!(series.get(LABEL_SAVED).unwrap().value, dec!(40));
        assert_eq!(series.get(LABEL_REMAINING).unwrap().value, dec!(60));
        assert_eq!(series.get(LABEL_REMAINING).unwrap().color, COLOR_SLATE);
    }

    #[test]
    fn test_goals_series_over_funded_clamps_remaining() {
        let series = goals_series(&goals(1, dec!(120), dec!(100)));
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(LABEL_REMAINING).unwrap().value, Decimal::ZERO);
    }

    #[test]
    fn test_goals_series_extreme_target_saturates() {
        let series = goals_series(&goals(1, dec!(-1), Decimal::MAX));
        assert_eq!(series.get(LABEL_REMAINING).unwrap().value, Decimal::MAX);
    }

    // ==================== per-holding series ====================

    #[test]
    fn test_holding_breakdown_series_profit_and_loss() {
        let up = holding_breakdown_series(&holding(0, "UP", dec!(150)));
        let labels: Vec<&str> = up.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec![LABEL_INVESTED, LABEL_CURRENT, LABEL_GAIN]);
        assert_eq!(up.points()[2].value, dec!(50));
        assert_eq!(up.points()[1].color, COLOR_GREEN);

        let down = holding_breakdown_series(&holding(1, "DOWN", dec!(70)));
        assert_eq!(down.points()[2].label, LABEL_LOSS);
        assert_eq!(down.points()[2].value, dec!(30));
        assert_eq!(down.points()[1].color, COLOR_AMBER);
        assert_eq!(down.points()[2].color, COLOR_RED);
    }

    #[test]
    fn test_price_comparison_series_colors_last_price() {
        let above = price_comparison_series(&holding(0, "A", dec!(100)));
        assert_eq!(above.get(LABEL_LAST_PRICE).unwrap().color, COLOR_GREEN);

        let below = price_comparison_series(&holding(1, "B", dec!(99)));
        assert_eq!(below.get(LABEL_AVG_BUY).unwrap().value, dec!(100));
        assert_eq!(below.get(LABEL_LAST_PRICE).unwrap().color, COLOR_RED);
    }

    #[test]
    fn test_series_serializes_as_array() {
        let series = goals_series(&goals(1, dec!(10), dec!(30)));
        let json = serde_json::to_value(&series).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["label"], "Remaining");
        assert_eq!(json[1]["id"], 1);
    }
}
