//! Maps a stated motivation onto one of the three strategies, with a
//! human-readable justification.

use rust_decimal::Decimal;

use crate::model::{Comparison, Debt, MotivationStyle, Recommendation, StrategyKind};

/// Balance-weighted average APR across a debt set:
/// `sum(balance * apr) / sum(balance)`.
///
/// Returns zero when the total balance is zero; that input is degenerate but
/// not an error. A single debt's weighted average is exactly its own APR.
pub fn weighted_average_apr(debts: &[Debt]) -> Decimal {
    let total: Decimal = debts.iter().map(|debt| debt.balance).sum();
    if total.is_zero() {
        return Decimal::ZERO;
    }
    let weighted: Decimal = debts.iter().map(|debt| debt.balance * debt.apr).sum();
    weighted / total
}

/// Picks a strategy for the caller's motivation and explains why.
///
/// `quick_wins` always recommends snowball, `optimization` always recommends
/// avalanche, and `rate_arbitrage` recommends consolidation only when its
/// rate actually beats the balance-weighted average APR of the debts.
pub fn recommend(
    comparison: &Comparison,
    debts: &[Debt],
    style: MotivationStyle,
) -> Recommendation {
    match style {
        MotivationStyle::QuickWins => {
            let reasoning = match comparison.snowball.payoff_order.first() {
                Some(first) => format!(
                    "The snowball plan clears {} by month {}, an early win that \
                     frees up its minimum payment and keeps you motivated while \
                     the larger balances come down.",
                    first.debt_name, first.month
                ),
                None => "The snowball plan attacks the smallest balance first, \
                         producing the earliest possible paid-in-full moment."
                    .to_string(),
            };
            Recommendation {
                recommended: StrategyKind::Snowball,
                reasoning,
            }
        }
        MotivationStyle::Optimization => {
            let savings = (comparison.snowball.total_interest_paid
                - comparison.avalanche.total_interest_paid)
                .round_dp(2);
            Recommendation {
                recommended: StrategyKind::Avalanche,
                reasoning: format!(
                    "Targeting the highest rate first pays ${savings} less \
                     interest than the snowball plan over the life of the \
                     debts, while finishing in {} months.",
                    comparison.avalanche.payoff_months
                ),
            }
        }
        MotivationStyle::RateArbitrage => {
            let average_apr = weighted_average_apr(debts);
            let consolidated_apr = comparison
                .consolidation
                .consolidation
                .as_ref()
                .map(|details| details.consolidated_apr);
            match consolidated_apr {
                Some(rate) if rate < average_apr => Recommendation {
                    recommended: StrategyKind::Consolidation,
                    reasoning: format!(
                        "A consolidation loan at {rate}% undercuts your \
                         balance-weighted average APR of {}%, so one fixed \
                         payment at the lower rate costs less than carrying \
                         the mix of rates you have now.",
                        average_apr.round_dp(2)
                    ),
                },
                _ => Recommendation {
                    recommended: StrategyKind::Avalanche,
                    reasoning: "The consolidation rate does not beat the \
                                average rate you already pay, so the avalanche \
                                plan, which yields the lowest total interest, \
                                is the better choice."
                        .to_string(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanInput;
    use crate::strategy::compare_strategies;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn debt(id: &str, balance: Decimal, apr: Decimal, minimum: Decimal) -> Debt {
        Debt {
            id: id.to_string(),
            name: id.to_uppercase(),
            balance,
            apr,
            minimum_payment: minimum,
        }
    }

    fn sample_debts() -> Vec<Debt> {
        vec![
            debt("a", dec!(5000), dec!(20), dec!(100)),
            debt("b", dec!(3000), dec!(15), dec!(60)),
            debt("c", dec!(2000), dec!(10), dec!(40)),
        ]
    }

    fn comparison_for(consolidation_apr: Decimal) -> Comparison {
        let input = PlanInput {
            extra_monthly_payment: dec!(200),
            consolidation_apr,
            ..PlanInput::new(sample_debts(), start())
        };
        compare_strategies(&input).unwrap()
    }

    #[test]
    fn test_weighted_average_apr_of_mixed_balances() {
        // (5000*20 + 3000*15 + 2000*10) / 10000 = 16.5
        assert_eq!(weighted_average_apr(&sample_debts()), dec!(16.5));
    }

    #[test]
    fn test_weighted_average_apr_of_single_debt_is_its_own_apr() {
        let debts = vec![debt("only", dec!(4321), dec!(17.89), dec!(90))];
        assert_eq!(weighted_average_apr(&debts), dec!(17.89));
    }

    #[test]
    fn test_weighted_average_apr_of_zero_total_balance_is_zero() {
        let debts = vec![
            debt("a", dec!(0), dec!(20), dec!(0)),
            debt("b", dec!(0), dec!(10), dec!(0)),
        ];
        assert_eq!(weighted_average_apr(&debts), Decimal::ZERO);
    }

    #[test]
    fn test_quick_wins_recommends_snowball_and_cites_first_payoff() {
        let comparison = comparison_for(dec!(15));
        let pick = recommend(&comparison, &sample_debts(), MotivationStyle::QuickWins);

        assert_eq!(pick.recommended, StrategyKind::Snowball);
        let first = comparison.snowball.payoff_order.first().unwrap();
        assert!(pick.reasoning.contains(&first.debt_name));
        assert!(pick.reasoning.contains(&format!("month {}", first.month)));
    }

    #[test]
    fn test_optimization_recommends_avalanche_and_cites_savings() {
        let comparison = comparison_for(dec!(15));
        let pick = recommend(&comparison, &sample_debts(), MotivationStyle::Optimization);

        assert_eq!(pick.recommended, StrategyKind::Avalanche);
        let savings = (comparison.snowball.total_interest_paid
            - comparison.avalanche.total_interest_paid)
            .round_dp(2);
        assert!(pick.reasoning.contains(&format!("${savings}")));
    }

    #[test]
    fn test_rate_arbitrage_recommends_consolidation_when_cheaper() {
        // 15% consolidation against a 16.5% weighted average.
        let comparison = comparison_for(dec!(15));
        let pick = recommend(&comparison, &sample_debts(), MotivationStyle::RateArbitrage);
        assert_eq!(pick.recommended, StrategyKind::Consolidation);
    }

    #[test]
    fn test_rate_arbitrage_falls_back_to_avalanche_when_not_cheaper() {
        // 18% consolidation is worse than the 16.5% weighted average.
        let comparison = comparison_for(dec!(18));
        let pick = recommend(&comparison, &sample_debts(), MotivationStyle::RateArbitrage);
        assert_eq!(pick.recommended, StrategyKind::Avalanche);
    }
}
