//! Debt orderings, the consolidation model and the three-way comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PayoffError, Result};
use crate::model::{
    Comparison, ComparisonSummary, ConsolidationDetails, Debt, DebtSnapshot, PayoffResult,
    PlanInput, StrategyKind,
};
use crate::simulator::simulate_payoff;

/// Sorts debts by APR descending. The sort is stable: equal APRs keep their
/// input order.
pub fn avalanche_order(debts: &[Debt]) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| b.apr.cmp(&a.apr));
    ordered
}

/// Sorts debts by balance ascending. The sort is stable: equal balances keep
/// their input order.
pub fn snowball_order(debts: &[Debt]) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| a.balance.cmp(&b.balance));
    ordered
}

/// Runs the avalanche strategy: minimums everywhere, extra payment to the
/// highest-APR debt first.
pub fn avalanche_plan(
    debts: &[Debt],
    extra_payment: Decimal,
    start_date: NaiveDate,
    max_months: u32,
) -> Result<PayoffResult> {
    simulate_payoff(
        &avalanche_order(debts),
        extra_payment,
        StrategyKind::Avalanche,
        start_date,
        max_months,
    )
}

/// Runs the snowball strategy: minimums everywhere, extra payment to the
/// lowest-balance debt first.
pub fn snowball_plan(
    debts: &[Debt],
    extra_payment: Decimal,
    start_date: NaiveDate,
    max_months: u32,
) -> Result<PayoffResult> {
    simulate_payoff(
        &snowball_order(debts),
        extra_payment,
        StrategyKind::Snowball,
        start_date,
        max_months,
    )
}

/// Collapses all debts into a single loan at `consolidation_apr` whose fixed
/// monthly payment is the sum of the original minimums, then simulates it.
///
/// Consolidation is modeled as a fixed refinance: there is no extra-payment
/// lever, which is why this function does not take one.
pub fn consolidation_plan(
    debts: &[Debt],
    consolidation_apr: Decimal,
    start_date: NaiveDate,
    max_months: u32,
) -> Result<PayoffResult> {
    if debts.is_empty() {
        return Err(PayoffError::EmptyDebtList);
    }
    let balance: Decimal = debts.iter().map(|debt| debt.balance).sum();
    let monthly_payment: Decimal = debts.iter().map(|debt| debt.minimum_payment).sum();

    let loan = Debt {
        id: "consolidated".to_string(),
        name: "Consolidated Loan".to_string(),
        balance,
        apr: consolidation_apr,
        minimum_payment: monthly_payment,
    };
    let mut result = simulate_payoff(
        &[loan],
        Decimal::ZERO,
        StrategyKind::Consolidation,
        start_date,
        max_months,
    )?;
    result.consolidation = Some(ConsolidationDetails {
        consolidated_apr: consolidation_apr,
        monthly_payment,
        original_debts: debts
            .iter()
            .map(|debt| DebtSnapshot {
                name: debt.name.clone(),
                balance: debt.balance,
                apr: debt.apr,
            })
            .collect(),
    });
    Ok(result)
}

/// Picks the strategy with the strictly smallest key; earlier entries win
/// ties, so avalanche beats snowball beats consolidation.
fn strict_minimum<K: Ord + Copy>(candidates: &[(StrategyKind, K)]) -> StrategyKind {
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = candidate;
        }
    }
    best.0
}

/// Runs avalanche, snowball and consolidation over the same debt set and
/// summarizes which strategy pays the least interest and which finishes
/// first.
pub fn compare_strategies(input: &PlanInput) -> Result<Comparison> {
    let avalanche = avalanche_plan(
        &input.debts,
        input.extra_monthly_payment,
        input.start_date,
        input.max_months,
    )?;
    let snowball = snowball_plan(
        &input.debts,
        input.extra_monthly_payment,
        input.start_date,
        input.max_months,
    )?;
    let consolidation = consolidation_plan(
        &input.debts,
        input.consolidation_apr,
        input.start_date,
        input.max_months,
    )?;

    let summary = ComparisonSummary {
        lowest_interest_strategy: strict_minimum(&[
            (StrategyKind::Avalanche, avalanche.total_interest_paid),
            (StrategyKind::Snowball, snowball.total_interest_paid),
            (StrategyKind::Consolidation, consolidation.total_interest_paid),
        ]),
        fastest_payoff_strategy: strict_minimum(&[
            (StrategyKind::Avalanche, avalanche.payoff_months),
            (StrategyKind::Snowball, snowball.payoff_months),
            (StrategyKind::Consolidation, consolidation.payoff_months),
        ]),
    };

    Ok(Comparison {
        avalanche,
        snowball,
        consolidation,
        summary,
    })
}
