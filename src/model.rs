//! Domain types for debts, payoff schedules and strategy comparison.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::simulator::DEFAULT_MAX_MONTHS;

/// Default APR assumed for a consolidation loan when the caller does not
/// supply one.
pub const DEFAULT_CONSOLIDATION_APR: Decimal = dec!(15.0);

/// A single credit obligation.
///
/// `apr` is the annual percentage rate in percent (`17.89` means 17.89%).
/// A debt with a zero balance is considered already paid off and is skipped
/// by the simulator. Caller-supplied debts are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub apr: Decimal,
    pub minimum_payment: Decimal,
}

/// One simulated month for one debt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmortizationEntry {
    pub debt_id: String,
    pub debt_name: String,
    /// 1-based month counter, shared by every debt in the schedule.
    pub month_number: u32,
    pub payment_date: NaiveDate,
    pub payment_amount: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Balance left on this debt after the payment, never negative.
    pub remaining_balance: Decimal,
}

/// The three competing allocation policies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Extra payment goes to the highest-APR debt first.
    Avalanche,
    /// Extra payment goes to the lowest-balance debt first.
    Snowball,
    /// All debts replaced by one loan at a single APR.
    Consolidation,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Avalanche => "avalanche",
            StrategyKind::Snowball => "snowball",
            StrategyKind::Consolidation => "consolidation",
        };
        f.write_str(label)
    }
}

/// A debt tagged with the month its balance reached zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoffEvent {
    pub debt_id: String,
    pub debt_name: String,
    pub month: u32,
}

/// Snapshot of an input debt, kept on a consolidation result for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtSnapshot {
    pub name: String,
    pub balance: Decimal,
    pub apr: Decimal,
}

/// Extra fields carried by a consolidation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsolidationDetails {
    pub consolidated_apr: Decimal,
    /// Fixed monthly payment of the consolidated loan, the sum of the
    /// original minimums.
    pub monthly_payment: Decimal,
    pub original_debts: Vec<DebtSnapshot>,
}

/// Complete outcome of simulating one strategy to payoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoffResult {
    pub strategy: StrategyKind,
    pub total_debt_at_start: Decimal,
    pub extra_monthly_payment: Decimal,
    /// Months until every debt's remaining balance is zero.
    pub payoff_months: u32,
    pub payoff_date: NaiveDate,
    pub total_interest_paid: Decimal,
    /// One entry per debt per active month.
    pub schedule: Vec<AmortizationEntry>,
    /// Debts in the order their balance reached zero.
    pub payoff_order: Vec<PayoffEvent>,
    /// Present only on consolidation runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consolidation: Option<ConsolidationDetails>,
}

/// Which strategy won on each aggregate metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonSummary {
    pub lowest_interest_strategy: StrategyKind,
    pub fastest_payoff_strategy: StrategyKind,
}

/// All three strategies run over the same debt set, plus the summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub avalanche: PayoffResult,
    pub snowball: PayoffResult,
    pub consolidation: PayoffResult,
    pub summary: ComparisonSummary,
}

/// The caller's stated preference for how to attack their debt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MotivationStyle {
    /// Early psychological wins: clear a small debt fast.
    QuickWins,
    /// Minimize total interest paid.
    #[default]
    Optimization,
    /// Refinance everything at a cheaper rate if one is available.
    RateArbitrage,
}

/// A recommended strategy with a human-readable justification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub recommended: StrategyKind,
    pub reasoning: String,
}

/// Input parameters for a full payoff plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanInput {
    pub debts: Vec<Debt>,
    /// Discretionary budget on top of the minimums. Negative values are
    /// treated as zero.
    pub extra_monthly_payment: Decimal,
    pub consolidation_apr: Decimal,
    pub motivation_style: MotivationStyle,
    /// Calendar month the first simulated payment falls in.
    pub start_date: NaiveDate,
    /// Safety bound on simulated months before a run is declared
    /// non-converging.
    pub max_months: u32,
}

impl PlanInput {
    /// Builds an input with the default consolidation APR, motivation style
    /// and month bound, and no extra payment.
    pub fn new(debts: Vec<Debt>, start_date: NaiveDate) -> Self {
        PlanInput {
            debts,
            extra_monthly_payment: Decimal::ZERO,
            consolidation_apr: DEFAULT_CONSOLIDATION_APR,
            motivation_style: MotivationStyle::default(),
            start_date,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Output of the crate entry point: the three-way comparison and the pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoffPlan {
    pub comparison: Comparison,
    pub recommendation: Recommendation,
}
