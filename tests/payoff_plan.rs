//! End-to-end scenarios over the public API: full plans, the recommendation
//! decision table, and the JSON shape the serving layer consumes.

use chrono::NaiveDate;
use payoff_planner::{
    Debt, MotivationStyle, PayoffError, PlanInput, StrategyKind, build_payoff_plan,
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn household_debts() -> Vec<Debt> {
    vec![
        Debt {
            id: "visa".to_string(),
            name: "Visa".to_string(),
            balance: dec!(3000),
            apr: dec!(24),
            minimum_payment: dec!(60),
        },
        Debt {
            id: "medical".to_string(),
            name: "Medical Bill".to_string(),
            balance: dec!(500),
            apr: dec!(0),
            minimum_payment: dec!(25),
        },
        Debt {
            id: "auto".to_string(),
            name: "Auto Loan".to_string(),
            balance: dec!(5000),
            apr: dec!(12),
            minimum_payment: dec!(100),
        },
    ]
}

fn household_input(style: MotivationStyle) -> PlanInput {
    PlanInput {
        extra_monthly_payment: dec!(300),
        motivation_style: style,
        ..PlanInput::new(household_debts(), start())
    }
}

#[rstest]
#[case(MotivationStyle::QuickWins, StrategyKind::Snowball)]
#[case(MotivationStyle::Optimization, StrategyKind::Avalanche)]
#[case(MotivationStyle::RateArbitrage, StrategyKind::Consolidation)]
fn test_motivation_style_drives_the_recommendation(
    #[case] style: MotivationStyle,
    #[case] expected: StrategyKind,
) {
    // Weighted average APR here is (3000*24 + 5000*12) / 8500 ≈ 15.53%, so
    // the default 15% consolidation rate qualifies for rate arbitrage.
    let plan = build_payoff_plan(&household_input(style)).unwrap();
    assert_eq!(plan.recommendation.recommended, expected);
    assert!(!plan.recommendation.reasoning.is_empty());
}

#[test]
fn test_full_plan_invariants_hold_for_every_strategy() {
    let plan = build_payoff_plan(&household_input(MotivationStyle::Optimization)).unwrap();
    let comparison = &plan.comparison;

    for result in [
        &comparison.avalanche,
        &comparison.snowball,
        &comparison.consolidation,
    ] {
        assert!(result.payoff_months > 0);
        assert_eq!(result.total_debt_at_start, dec!(8500));
        assert!(result.total_interest_paid >= Decimal::ZERO);
        for entry in &result.schedule {
            assert_eq!(entry.principal + entry.interest, entry.payment_amount);
            assert!(entry.remaining_balance >= Decimal::ZERO);
        }
        let last = result.schedule.last().unwrap();
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.month_number, result.payoff_months);
    }

    assert!(
        comparison.avalanche.total_interest_paid
            <= comparison.snowball.total_interest_paid + dec!(1)
    );
}

#[test]
fn test_avalanche_and_snowball_disagree_on_first_target() {
    let plan = build_payoff_plan(&household_input(MotivationStyle::Optimization)).unwrap();

    // Avalanche attacks the 24% card; snowball attacks the $500 bill.
    assert_eq!(plan.comparison.avalanche.payoff_order[0].debt_id, "visa");
    assert_eq!(plan.comparison.snowball.payoff_order[0].debt_id, "medical");
}

#[test]
fn test_consolidation_result_reports_the_refinance_terms() {
    let plan = build_payoff_plan(&household_input(MotivationStyle::RateArbitrage)).unwrap();
    let details = plan
        .comparison
        .consolidation
        .consolidation
        .as_ref()
        .unwrap();

    assert_eq!(details.consolidated_apr, dec!(15.0));
    assert_eq!(details.monthly_payment, dec!(185));
    assert_eq!(details.original_debts.len(), 3);
}

#[test]
fn test_empty_debt_list_is_rejected() {
    let input = PlanInput::new(Vec::new(), start());
    assert_eq!(
        build_payoff_plan(&input).unwrap_err(),
        PayoffError::EmptyDebtList
    );
}

#[test]
fn test_comparison_serializes_with_snake_case_tags() {
    let plan = build_payoff_plan(&household_input(MotivationStyle::Optimization)).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(
        value["comparison"]["summary"]["lowest_interest_strategy"],
        "avalanche"
    );
    assert_eq!(value["comparison"]["avalanche"]["strategy"], "avalanche");
    assert_eq!(value["recommendation"]["recommended"], "avalanche");
    // Non-consolidation results omit the refinance block entirely.
    assert!(
        value["comparison"]["avalanche"]
            .as_object()
            .unwrap()
            .get("consolidation")
            .is_none()
    );
    assert!(
        value["comparison"]["consolidation"]
            .as_object()
            .unwrap()
            .get("consolidation")
            .is_some()
    );

    let first_entry = &value["comparison"]["avalanche"]["schedule"][0];
    assert_eq!(first_entry["month_number"], 1);
    assert_eq!(first_entry["payment_date"], "2026-02-01");
}
