//! `payoff_planner` is a Rust library for simulating and comparing debt
//! payoff strategies.
//!
//! Given a set of debts (balance, APR, minimum payment) and an optional extra
//! monthly budget, it produces a month-by-month amortization schedule under
//! three competing allocation policies and recommends one of them:
//! - **Avalanche**: pay minimums everywhere, direct the extra payment to the
//!   highest-APR debt first. Interest-optimal.
//! - **Snowball**: direct the extra payment to the lowest-balance debt first.
//!   Produces the earliest paid-in-full moment.
//! - **Consolidation**: replace all debts with one loan at a single APR whose
//!   monthly payment is the sum of the prior minimums.
//!
//! ## Usage
//!
//! Add `payoff_planner` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! payoff_planner = "0.1.0"
//! chrono = "0.4"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then build a [`PlanInput`] and call [`build_payoff_plan`]:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use payoff_planner::{build_payoff_plan, Debt, MotivationStyle, PlanInput};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let debts = vec![
//!         Debt {
//!             id: "visa".to_string(),
//!             name: "Visa".to_string(),
//!             balance: dec!(3000),
//!             apr: dec!(24),
//!             minimum_payment: dec!(60),
//!         },
//!         Debt {
//!             id: "auto".to_string(),
//!             name: "Auto Loan".to_string(),
//!             balance: dec!(5000),
//!             apr: dec!(12),
//!             minimum_payment: dec!(100),
//!         },
//!     ];
//!
//!     let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//!     let input = PlanInput {
//!         extra_monthly_payment: dec!(250),
//!         motivation_style: MotivationStyle::Optimization,
//!         ..PlanInput::new(debts, start)
//!     };
//!
//!     match build_payoff_plan(&input) {
//!         Ok(plan) => {
//!             let avalanche = &plan.comparison.avalanche;
//!             println!("Debt free in {} months", avalanche.payoff_months);
//!             println!("Total interest: {}", avalanche.total_interest_paid);
//!             println!("{}", plan.recommendation.reasoning);
//!         }
//!         Err(e) => {
//!             eprintln!("Error building payoff plan: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod model;
pub mod recommend;
pub mod simulator;
pub mod strategy;

pub use error::{PayoffError, Result};
pub use model::{
    AmortizationEntry, Comparison, ComparisonSummary, ConsolidationDetails,
    DEFAULT_CONSOLIDATION_APR, Debt, DebtSnapshot, MotivationStyle, PayoffEvent, PayoffPlan,
    PayoffResult, PlanInput, Recommendation, StrategyKind,
};
pub use recommend::{recommend, weighted_average_apr};
pub use simulator::{DEFAULT_MAX_MONTHS, simulate_payoff};
pub use strategy::{
    avalanche_order, avalanche_plan, compare_strategies, consolidation_plan, snowball_order,
    snowball_plan,
};

/// Runs all three strategies over the input debts and picks one for the
/// caller's stated motivation.
///
/// This is the main entry point of the library.
///
/// # Errors
///
/// Returns [`PayoffError::EmptyDebtList`] when `input.debts` is empty, and
/// [`PayoffError::RuntimeBoundExceeded`] when any strategy fails to retire
/// every debt within `input.max_months`.
pub fn build_payoff_plan(input: &PlanInput) -> Result<PayoffPlan> {
    let comparison = compare_strategies(input)?;
    let recommendation = recommend(&comparison, &input.debts, input.motivation_style);
    Ok(PayoffPlan {
        comparison,
        recommendation,
    })
}
