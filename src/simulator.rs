//! The month-by-month amortization loop shared by every strategy.
//!
//! The simulator is ordering-agnostic: the caller passes debts in the order
//! that encodes the strategy, and each month the first still-active debt in
//! that order receives the extra payment on top of its own minimum. Every
//! other debt keeps accruing its own interest and paying its own minimum,
//! which is what distinguishes a targeted strategy from paying everything
//! evenly.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{PayoffError, Result};
use crate::model::{AmortizationEntry, Debt, PayoffEvent, PayoffResult, StrategyKind};

/// Default ceiling on simulated months before a run is declared
/// non-converging.
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Balances within a cent of zero are written off as retired.
const CENT: Decimal = dec!(0.01);

const HUNDRED: Decimal = dec!(100);
const TWELVE: Decimal = dec!(12);

/// Simple (non-compounding) interest for one month on a balance:
/// `balance * (apr / 100) / 12`, rounded to cents.
///
/// Returns `None` when the multiply would overflow `Decimal`; a balance that
/// large has been growing for hundreds of months and is non-converging.
fn monthly_interest(balance: Decimal, apr: Decimal) -> Option<Decimal> {
    balance
        .checked_mul(apr)
        .map(|product| (product / HUNDRED / TWELVE).round_dp(2))
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Internal per-debt simulation state. Caller-owned `Debt` values are never
/// mutated; only this struct carries the running balance.
struct ActiveDebt<'a> {
    debt: &'a Debt,
    remaining: Decimal,
}

/// Simulates payoff of `ordered_debts` month by month until every balance is
/// zero.
///
/// A negative `extra_payment` is treated as zero. Debts arriving with a zero
/// balance are already paid off and are skipped.
///
/// # Errors
///
/// Returns [`PayoffError::EmptyDebtList`] when `ordered_debts` is empty, and
/// [`PayoffError::RuntimeBoundExceeded`] when the loop passes `max_months`
/// without full payoff, or when a runaway balance grows past what `Decimal`
/// can represent (no partial schedule is returned either way).
pub fn simulate_payoff(
    ordered_debts: &[Debt],
    extra_payment: Decimal,
    strategy: StrategyKind,
    start_date: NaiveDate,
    max_months: u32,
) -> Result<PayoffResult> {
    if ordered_debts.is_empty() {
        return Err(PayoffError::EmptyDebtList);
    }
    let extra_payment = extra_payment.max(Decimal::ZERO).round_dp(2);

    let mut active: Vec<ActiveDebt<'_>> = ordered_debts
        .iter()
        .filter(|debt| debt.balance > Decimal::ZERO)
        .map(|debt| ActiveDebt {
            debt,
            remaining: debt.balance.round_dp(2),
        })
        .collect();

    let total_debt_at_start: Decimal = active.iter().map(|slot| slot.remaining).sum();

    let mut schedule = Vec::new();
    let mut payoff_order: Vec<PayoffEvent> = Vec::new();
    let mut total_interest = Decimal::ZERO;
    let mut month = 0u32;

    while active.iter().any(|slot| slot.remaining > Decimal::ZERO) {
        month += 1;
        if month > max_months {
            return Err(PayoffError::RuntimeBoundExceeded { max_months });
        }
        let payment_date = add_months(start_date, month);

        // The first still-active debt in caller order gets the extra payment.
        let target = active
            .iter()
            .position(|slot| slot.remaining > Decimal::ZERO);

        for (index, slot) in active.iter_mut().enumerate() {
            if slot.remaining <= Decimal::ZERO {
                continue;
            }

            // Interest accrues on the balance before this month's payment.
            let Some(interest) = monthly_interest(slot.remaining, slot.debt.apr) else {
                return Err(PayoffError::RuntimeBoundExceeded { max_months });
            };
            let mut payment = slot.debt.minimum_payment.round_dp(2);
            if Some(index) == target {
                payment += extra_payment;
            }

            let principal;
            if payment >= slot.remaining {
                // The scheduled payment covers the outstanding principal, so
                // the debt retires this month: pay it off exactly, with the
                // accrued interest on top.
                principal = slot.remaining;
                payment = principal + interest;
                slot.remaining = Decimal::ZERO;
            } else {
                principal = payment - interest;
                slot.remaining = (slot.remaining - principal).round_dp(2);
                if slot.remaining <= CENT {
                    slot.remaining = Decimal::ZERO;
                }
            }
            total_interest += interest;

            schedule.push(AmortizationEntry {
                debt_id: slot.debt.id.clone(),
                debt_name: slot.debt.name.clone(),
                month_number: month,
                payment_date,
                payment_amount: payment,
                principal,
                interest,
                remaining_balance: slot.remaining,
            });

            if slot.remaining == Decimal::ZERO {
                payoff_order.push(PayoffEvent {
                    debt_id: slot.debt.id.clone(),
                    debt_name: slot.debt.name.clone(),
                    month,
                });
            }
        }
    }

    Ok(PayoffResult {
        strategy,
        total_debt_at_start,
        extra_monthly_payment: extra_payment,
        payoff_months: month,
        payoff_date: add_months(start_date, month),
        total_interest_paid: total_interest.round_dp(2),
        schedule,
        payoff_order,
        consolidation: None,
    })
}
