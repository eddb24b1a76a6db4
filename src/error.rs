//! Error type shared by every strategy entry point.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayoffError {
    /// Every strategy needs at least one debt to simulate.
    #[error("debt list is empty")]
    EmptyDebtList,

    /// The amortization loop ran past its safety bound without retiring every
    /// debt. Payments are too small relative to accruing interest; retrying
    /// with the same input fails the same way.
    #[error("payoff did not complete within {max_months} months")]
    RuntimeBoundExceeded { max_months: u32 },
}

pub type Result<T> = std::result::Result<T, PayoffError>;
