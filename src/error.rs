//! Input validation errors for the simulation engine
//!
//! The engine is pure arithmetic, so every failure is a precondition
//! violation detected before any simulation work starts.

use thiserror::Error;

/// Precondition violations on loan inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Term of zero months cannot be amortized (division by zero in the
    /// annuity formula, zero-iteration schedules everywhere else)
    #[error("loan term must be at least 1 month")]
    InvalidTerm,

    /// A negative periodic rate would produce a growing-balance schedule
    #[error("periodic rate must be non-negative, got {rate}")]
    InvalidRate { rate: f64 },

    /// Negative principal or overpayment
    #[error("{what} must be non-negative, got {value}")]
    InvalidAmount { what: &'static str, value: f64 },
}
