//! Loan input terms and validation

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Input terms for one annuity-style (equal installment) loan
///
/// All rates are periodic fractions: an annual percentage rate must be
/// converted before construction (see [`monthly_rate_from_annual_pct`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Outstanding principal at the start of the simulation
    pub principal: f64,

    /// Interest rate applied once per month, as a fraction (7% annual -> ~0.005833)
    pub monthly_rate: f64,

    /// Contractual term in months
    pub total_months: u32,

    /// Voluntary extra payment per month, applied entirely to principal
    pub overpayment: f64,
}

impl LoanTerms {
    /// Create loan terms from the four scalar inputs
    pub fn new(principal: f64, monthly_rate: f64, total_months: u32, overpayment: f64) -> Self {
        Self {
            principal,
            monthly_rate,
            total_months,
            overpayment,
        }
    }

    /// Check all preconditions the simulators rely on
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.total_months == 0 {
            return Err(SimulationError::InvalidTerm);
        }
        if self.monthly_rate < 0.0 || !self.monthly_rate.is_finite() {
            return Err(SimulationError::InvalidRate {
                rate: self.monthly_rate,
            });
        }
        if self.principal < 0.0 || !self.principal.is_finite() {
            return Err(SimulationError::InvalidAmount {
                what: "principal",
                value: self.principal,
            });
        }
        if self.overpayment < 0.0 || !self.overpayment.is_finite() {
            return Err(SimulationError::InvalidAmount {
                what: "overpayment",
                value: self.overpayment,
            });
        }
        Ok(())
    }

    /// Same terms with a different overpayment (for sweeps)
    pub fn with_overpayment(&self, overpayment: f64) -> Self {
        Self {
            overpayment,
            ..*self
        }
    }
}

/// Convert an annual percentage rate to the monthly fraction used by the engine
///
/// This is presentation-side unit conversion: 7.0 (percent per year)
/// becomes 7 / 100 / 12 per month.
pub fn monthly_rate_from_annual_pct(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(500_000.0, 0.07 / 12.0, 300, 500.0);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_zero_rate_and_overpayment_are_valid() {
        let terms = LoanTerms::new(100_000.0, 0.0, 120, 0.0);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_zero_term_rejected() {
        let terms = LoanTerms::new(100_000.0, 0.005, 0, 0.0);
        assert_eq!(terms.validate(), Err(SimulationError::InvalidTerm));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let terms = LoanTerms::new(100_000.0, -0.001, 120, 0.0);
        assert!(matches!(
            terms.validate(),
            Err(SimulationError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let bad_principal = LoanTerms::new(-1.0, 0.005, 120, 0.0);
        assert!(matches!(
            bad_principal.validate(),
            Err(SimulationError::InvalidAmount {
                what: "principal",
                ..
            })
        ));

        let bad_overpayment = LoanTerms::new(100_000.0, 0.005, 120, -500.0);
        assert!(matches!(
            bad_overpayment.validate(),
            Err(SimulationError::InvalidAmount {
                what: "overpayment",
                ..
            })
        ));
    }

    #[test]
    fn test_annual_pct_conversion() {
        assert_relative_eq!(monthly_rate_from_annual_pct(7.0), 7.0 / 1200.0);
        assert_relative_eq!(monthly_rate_from_annual_pct(0.0), 0.0);
    }
}
