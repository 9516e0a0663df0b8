//! Scenario runner for strategy comparisons and overpayment sweeps
//!
//! Bundles the three simulations (baseline, shorten term, reduce payment)
//! for one set of loan terms, and runs the same loan across a range of
//! overpayment levels.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::loan::LoanTerms;
use crate::simulation::{AmortizationEngine, StrategyResult};

/// Side-by-side outcome of both strategies against the baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Terms the comparison was run with
    pub terms: LoanTerms,

    /// Bank-required monthly installment for the original terms
    pub base_installment: f64,

    /// Total interest over the full term with no overpayments
    pub baseline_interest: f64,

    /// Strategy A: fixed installment, loan ends early
    pub shorten_term: StrategyResult,

    /// Strategy B: installment recalculated downward each month
    pub reduce_payment: StrategyResult,
}

impl StrategyComparison {
    /// Interest saved by the shorten-term strategy vs the baseline
    pub fn shorten_term_savings(&self) -> f64 {
        self.baseline_interest - self.shorten_term.total_interest
    }

    /// Interest saved by the reduce-payment strategy vs the baseline
    pub fn reduce_payment_savings(&self) -> f64 {
        self.baseline_interest - self.reduce_payment.total_interest
    }

    /// Months cut off the contractual term by the shorten-term strategy
    pub fn months_saved(&self) -> u32 {
        self.terms.total_months - self.shorten_term.months
    }

    /// Drop in the required installment achieved by the reduce-payment strategy
    pub fn installment_reduction(&self) -> f64 {
        self.base_installment - self.reduce_payment.final_installment
    }
}

/// Runs strategy comparisons for one loan across varying overpayment levels
///
/// # Example
/// ```
/// use mortgage_overpayment::{LoanTerms, ScenarioRunner};
///
/// let terms = LoanTerms::new(500_000.0, 7.0 / 1200.0, 300, 500.0);
/// let runner = ScenarioRunner::new(terms);
/// let comparison = runner.run().unwrap();
/// assert!(comparison.shorten_term.months < 300);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    terms: LoanTerms,
}

impl ScenarioRunner {
    /// Create a runner for the given base terms
    pub fn new(terms: LoanTerms) -> Self {
        Self { terms }
    }

    /// Base terms used for comparisons
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Run all three simulations for the base terms
    pub fn run(&self) -> Result<StrategyComparison, SimulationError> {
        self.run_with_overpayment(self.terms.overpayment)
    }

    /// Run all three simulations with a specific overpayment level
    pub fn run_with_overpayment(
        &self,
        overpayment: f64,
    ) -> Result<StrategyComparison, SimulationError> {
        let terms = self.terms.with_overpayment(overpayment);
        let engine = AmortizationEngine::new(terms)?;

        Ok(StrategyComparison {
            terms,
            base_installment: engine.base_installment(),
            baseline_interest: engine.baseline_interest(),
            shorten_term: engine.shorten_term(),
            reduce_payment: engine.reduce_payment(),
        })
    }

    /// Run one comparison per overpayment level, other terms held fixed
    pub fn run_sweep(
        &self,
        overpayments: &[f64],
    ) -> Result<Vec<StrategyComparison>, SimulationError> {
        overpayments
            .iter()
            .map(|&op| self.run_with_overpayment(op))
            .collect()
    }
}
