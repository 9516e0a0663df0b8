//! Simulation state tracking for a single loan

use crate::loan::LoanTerms;

/// Balance below which a loan counts as fully repaid
///
/// Guards the loop condition against float residue after the capped final
/// payment; well below any representable currency amount.
pub const SETTLED_EPSILON: f64 = 1e-9;

/// State of a loan at a point in time during simulation
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Months simulated so far (1-indexed after the first advance)
    pub month: u32,

    /// Outstanding balance
    pub balance: f64,

    /// Cumulative interest paid so far
    pub total_interest: f64,

    /// Months left of the contractual term
    pub remaining_months: u32,

    /// Bank-required installment currently in effect
    pub installment: f64,
}

impl AmortizationState {
    /// Initialize state from loan terms at simulation start
    pub fn from_terms(terms: &LoanTerms, installment: f64) -> Self {
        Self {
            month: 0,
            balance: terms.principal,
            total_interest: 0.0,
            remaining_months: terms.total_months,
            installment,
        }
    }

    /// Whether the balance has reached zero (within float tolerance)
    pub fn is_settled(&self) -> bool {
        self.balance <= SETTLED_EPSILON
    }

    /// Apply one month's payment split and advance the counters
    pub fn apply_month(&mut self, interest: f64, principal_paid: f64) {
        self.balance -= principal_paid;
        self.total_interest += interest;
        self.month += 1;
        self.remaining_months = self.remaining_months.saturating_sub(1);
    }
}
