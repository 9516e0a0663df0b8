//! Core simulation engine for monthly amortization projections
//!
//! Compares two overpayment strategies for an annuity (equal installment)
//! loan against a no-overpayment baseline:
//!
//! - Shorten term: fixed overpayment each month accelerates principal
//!   repayment, ending the loan earlier while the bank-required installment
//!   stays the same.
//! - Reduce payment: fixed overpayment each month, the bank recalculates the
//!   required installment downward after each payment.

use super::annuity::annuity_unchecked;
use super::schedule::{ScheduleEntry, StrategyResult};
use super::state::AmortizationState;
use crate::error::SimulationError;
use crate::loan::LoanTerms;

/// Main amortization engine
///
/// Construction validates the terms and computes the base installment; the
/// strategy methods are then infallible. Each simulation is a pure function
/// of the terms, so one engine can run all three simulations and be invoked
/// concurrently from independent calls.
pub struct AmortizationEngine {
    terms: LoanTerms,
    base_installment: f64,
}

impl AmortizationEngine {
    /// Create an engine for the given loan terms
    ///
    /// Fails fast on invalid inputs; no simulation work happens here beyond
    /// the closed-form base installment.
    pub fn new(terms: LoanTerms) -> Result<Self, SimulationError> {
        terms.validate()?;
        let base_installment =
            annuity_unchecked(terms.principal, terms.monthly_rate, terms.total_months);
        Ok(Self {
            terms,
            base_installment,
        })
    }

    /// Terms this engine was built from
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Bank-required monthly installment for the original terms
    pub fn base_installment(&self) -> f64 {
        self.base_installment
    }

    /// Total interest over the full term with no overpayments
    ///
    /// Simulates standard month-by-month amortization. Numerically
    /// equivalent to `base_installment * total_months - principal`, but
    /// computed iteratively so the float behavior matches the strategy
    /// simulations it is compared against.
    pub fn baseline_interest(&self) -> f64 {
        let mut balance = self.terms.principal;
        let mut total_interest = 0.0;
        for _ in 0..self.terms.total_months {
            let interest = balance * self.terms.monthly_rate;
            balance -= self.base_installment - interest;
            total_interest += interest;
        }
        total_interest
    }

    /// Strategy A: pay base installment + overpayment each month, finish earlier
    ///
    /// The bank-required installment stays constant throughout; the fixed
    /// overpayment accelerates principal repayment and shortens the term.
    pub fn shorten_term(&self) -> StrategyResult {
        let mut state = AmortizationState::from_terms(&self.terms, self.base_installment);
        let mut result = StrategyResult::new(self.base_installment);
        let payment = self.base_installment + self.terms.overpayment;

        // The month bound is a defensive stop only: with the installment
        // derived from the same terms, the balance reaches zero at or
        // before the contractual term.
        while !state.is_settled() && state.month < self.terms.total_months {
            let (interest, principal_paid) =
                split_payment(state.balance, self.terms.monthly_rate, payment);
            state.apply_month(interest, principal_paid);

            result.add_entry(ScheduleEntry {
                month: state.month,
                balance: state.balance,
                interest,
                principal: principal_paid,
                // Whatever exceeds the fixed required installment; floored
                // at zero so the capped final month cannot record a
                // negative overpayment
                overpayment: (interest + principal_paid - self.base_installment).max(0.0),
            });
        }

        result
    }

    /// Strategy B: pay recalculated installment + overpayment each month
    ///
    /// After each payment the bank recalculates the required installment for
    /// the remaining original term and the new (lower) balance. The
    /// installment decreases progressively while the borrower keeps the same
    /// fixed overpayment on top.
    pub fn reduce_payment(&self) -> StrategyResult {
        let mut state = AmortizationState::from_terms(&self.terms, self.base_installment);
        let mut result = StrategyResult::new(self.base_installment);

        while !state.is_settled() && state.remaining_months > 0 {
            let current_installment = state.installment;
            let payment = current_installment + self.terms.overpayment;
            let (interest, principal_paid) =
                split_payment(state.balance, self.terms.monthly_rate, payment);
            state.apply_month(interest, principal_paid);

            result.add_entry(ScheduleEntry {
                month: state.month,
                balance: state.balance,
                interest,
                principal: principal_paid,
                overpayment: (interest + principal_paid - current_installment).max(0.0),
            });

            // Recalculate the required installment against the reduced
            // balance and the shrinking remaining term
            if !state.is_settled() && state.remaining_months > 0 {
                state.installment = annuity_unchecked(
                    state.balance,
                    self.terms.monthly_rate,
                    state.remaining_months,
                );
            }
        }

        result.final_installment = state.installment;
        result
    }
}

/// Interest/principal split for one month's payment
///
/// Final-month cap: if the principal portion would exceed the remaining
/// balance, it is clamped so the balance cannot go negative; the borrower
/// does not overpay past a zero balance. Both strategies apply the identical
/// clamp rule.
fn split_payment(balance: f64, monthly_rate: f64, payment: f64) -> (f64, f64) {
    let interest = balance * monthly_rate;
    let mut principal_paid = payment - interest;
    if principal_paid > balance {
        principal_paid = balance;
    }
    (interest, principal_paid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // Standard scenario: 500k principal, 7% annual, 300 months, 500 overpayment
    const PRINCIPAL: f64 = 500_000.0;
    const MONTHLY_RATE: f64 = 7.0 / 100.0 / 12.0;
    const TOTAL_MONTHS: u32 = 300;
    const OVERPAYMENT: f64 = 500.0;

    fn engine(overpayment: f64) -> AmortizationEngine {
        let terms = LoanTerms::new(PRINCIPAL, MONTHLY_RATE, TOTAL_MONTHS, overpayment);
        AmortizationEngine::new(terms).unwrap()
    }

    #[test]
    fn test_invalid_terms_rejected_at_construction() {
        let terms = LoanTerms::new(PRINCIPAL, MONTHLY_RATE, 0, 0.0);
        assert_eq!(
            AmortizationEngine::new(terms).err(),
            Some(SimulationError::InvalidTerm)
        );
    }

    #[test]
    fn test_base_installment_known_value() {
        assert_eq!(engine(0.0).base_installment().round(), 3534.0);
    }

    #[test]
    fn test_baseline_accounting_identity() {
        // Total payments = principal + total interest
        let engine = engine(0.0);
        let total_paid = engine.base_installment() * TOTAL_MONTHS as f64;
        assert_relative_eq!(
            total_paid,
            PRINCIPAL + engine.baseline_interest(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_baseline_zero_rate_no_interest() {
        let terms = LoanTerms::new(100_000.0, 0.0, 100, 0.0);
        let engine = AmortizationEngine::new(terms).unwrap();
        assert_abs_diff_eq!(engine.baseline_interest(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shorten_term_shortens() {
        let result = engine(OVERPAYMENT).shorten_term();
        assert!(result.months < TOTAL_MONTHS);
    }

    #[test]
    fn test_shorten_term_zero_overpayment_matches_baseline() {
        let engine = engine(0.0);
        let result = engine.shorten_term();
        assert_eq!(result.months, TOTAL_MONTHS);
        assert_relative_eq!(
            result.total_interest,
            engine.baseline_interest(),
            max_relative = 1e-4
        );
        assert_relative_eq!(result.final_installment, engine.base_installment());
    }

    #[test]
    fn test_shorten_term_saves_interest() {
        let engine = engine(OVERPAYMENT);
        assert!(engine.shorten_term().total_interest < engine.baseline_interest());
    }

    #[test]
    fn test_shorten_term_balance_reaches_zero() {
        let result = engine(OVERPAYMENT).shorten_term();
        assert_abs_diff_eq!(result.final_balance(), 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_shorten_term_schedule_length_matches_months() {
        let result = engine(OVERPAYMENT).shorten_term();
        assert_eq!(result.schedule.len(), result.months as usize);
    }

    #[test]
    fn test_shorten_term_overpayment_equals_input() {
        // First month's recorded overpayment matches the configured amount
        let result = engine(OVERPAYMENT).shorten_term();
        assert_relative_eq!(
            result.schedule[0].overpayment,
            OVERPAYMENT,
            max_relative = 1e-6
        );
        assert!(result.schedule.iter().all(|e| e.overpayment >= 0.0));
    }

    #[test]
    fn test_larger_overpayment_shortens_more() {
        let small = engine(200.0).shorten_term();
        let large = engine(1000.0).shorten_term();
        assert!(large.months < small.months);
    }

    #[test]
    fn test_reduce_payment_saves_interest() {
        let engine = engine(OVERPAYMENT);
        assert!(engine.reduce_payment().total_interest < engine.baseline_interest());
    }

    #[test]
    fn test_reduce_payment_balance_reaches_zero() {
        let result = engine(OVERPAYMENT).reduce_payment();
        assert_abs_diff_eq!(result.final_balance(), 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_reduce_payment_schedule_length_matches_months() {
        let result = engine(OVERPAYMENT).reduce_payment();
        assert_eq!(result.schedule.len(), result.months as usize);
    }

    #[test]
    fn test_reduce_payment_installment_decreases() {
        let engine = engine(OVERPAYMENT);
        let result = engine.reduce_payment();
        assert!(result.final_installment < engine.base_installment());
    }

    #[test]
    fn test_reduce_payment_overpayments_nonnegative() {
        let result = engine(OVERPAYMENT).reduce_payment();
        assert!(result.schedule.iter().all(|e| e.overpayment >= 0.0));
    }

    #[test]
    fn test_reduce_payment_zero_overpayment_matches_baseline() {
        let engine = engine(0.0);
        let result = engine.reduce_payment();
        assert_eq!(result.months, TOTAL_MONTHS);
        assert_relative_eq!(
            result.total_interest,
            engine.baseline_interest(),
            max_relative = 1e-4
        );
        // Recalculation with zero overpayment converges back to (nearly)
        // the original installment each month
        assert_relative_eq!(
            result.final_installment,
            engine.base_installment(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_shorten_term_dominates_reduce_payment() {
        // Strategy A keeps a higher effective payment throughout, so it
        // always finishes sooner and accrues less interest for the same
        // overpayment
        let engine = engine(OVERPAYMENT);
        let a = engine.shorten_term();
        let b = engine.reduce_payment();
        assert!(a.months < b.months);
        assert!(a.total_interest < b.total_interest);

        let baseline = engine.baseline_interest();
        assert!(a.total_interest < baseline);
        assert!(b.total_interest < baseline);
    }

    #[test]
    fn test_schedule_invariants() {
        let engine = engine(OVERPAYMENT);
        for result in [engine.shorten_term(), engine.reduce_payment()] {
            // Months are 1-based, sequential, no gaps
            for (i, entry) in result.schedule.iter().enumerate() {
                assert_eq!(entry.month, i as u32 + 1);
            }

            // Balance recurrence: balance_after = balance_before - principal
            let mut balance_before = PRINCIPAL;
            for entry in &result.schedule {
                assert_relative_eq!(
                    entry.balance,
                    balance_before - entry.principal,
                    max_relative = 1e-9,
                    epsilon = 1e-6
                );
                assert_relative_eq!(
                    entry.interest,
                    balance_before * MONTHLY_RATE,
                    max_relative = 1e-9
                );
                balance_before = entry.balance;
            }

            // Principal portions sum to the original principal
            assert_relative_eq!(result.total_principal(), PRINCIPAL, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_zero_rate_loan_amortizes_evenly() {
        let terms = LoanTerms::new(120_000.0, 0.0, 120, 0.0);
        let engine = AmortizationEngine::new(terms).unwrap();
        assert_eq!(engine.base_installment(), 1000.0);

        let result = engine.shorten_term();
        assert_eq!(result.months, 120);
        assert_abs_diff_eq!(result.total_interest, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.final_balance(), 0.0, epsilon = 1e-9);
    }
}
