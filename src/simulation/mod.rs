//! Amortization simulation engine and its building blocks

mod annuity;
mod engine;
mod schedule;
mod state;

pub use annuity::annuity_payment;
pub use engine::AmortizationEngine;
pub use schedule::{ScheduleEntry, StrategyResult};
pub use state::AmortizationState;
