//! Annuity installment formula
//!
//! Closed-form computation of the fixed monthly payment that fully
//! amortizes a principal over a given term at a given periodic rate.

use crate::error::SimulationError;

/// Fixed monthly payment for the standard annuity (equal installment) loan
///
/// For rate r > 0: `P * r(1+r)^n / ((1+r)^n - 1)`.
/// For a zero rate the formula degenerates, so this falls back to simple
/// division `P / n`.
pub fn annuity_payment(
    principal: f64,
    monthly_rate: f64,
    months: u32,
) -> Result<f64, SimulationError> {
    if months == 0 {
        return Err(SimulationError::InvalidTerm);
    }
    if monthly_rate < 0.0 || !monthly_rate.is_finite() {
        return Err(SimulationError::InvalidRate { rate: monthly_rate });
    }
    if principal < 0.0 || !principal.is_finite() {
        return Err(SimulationError::InvalidAmount {
            what: "principal",
            value: principal,
        });
    }
    Ok(annuity_unchecked(principal, monthly_rate, months))
}

/// Formula body, preconditions already checked
///
/// Used directly by the engine's per-month installment recalculation,
/// where balance > 0 and remaining term >= 1 hold by construction.
pub(crate) fn annuity_unchecked(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate > 0.0 {
        let r_pow_n = (1.0 + monthly_rate).powi(months as i32);
        principal * (monthly_rate * r_pow_n) / (r_pow_n - 1.0)
    } else {
        principal / months as f64
    }
}
