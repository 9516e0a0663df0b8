//! Mortgage Overpayment - amortization projection engine for annuity loans
//!
//! This library provides:
//! - Closed-form annuity installment computation
//! - Month-by-month amortization simulation with a no-overpayment baseline
//! - Two overpayment strategies: shorten term and reduce payment
//! - Scenario runner for side-by-side comparisons and overpayment sweeps

pub mod error;
pub mod loan;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use error::SimulationError;
pub use loan::{monthly_rate_from_annual_pct, LoanTerms};
pub use scenario::{ScenarioRunner, StrategyComparison};
pub use simulation::{annuity_payment, AmortizationEngine, ScheduleEntry, StrategyResult};
