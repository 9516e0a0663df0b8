//! Schedule output structures for strategy simulations

use serde::{Deserialize, Serialize};

/// One simulated month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Month index, 1-based and gapless
    pub month: u32,

    /// Remaining balance after this month's payment
    pub balance: f64,

    /// Interest portion of this month's payment (balance before payment * rate)
    pub interest: f64,

    /// Principal portion of this month's payment
    pub principal: f64,

    /// Amount paid above the required installment this month, never negative
    pub overpayment: f64,
}

/// Outcome of one full repayment-strategy simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Number of months actually needed to reach zero balance
    pub months: u32,

    /// Cumulative interest paid across all months
    pub total_interest: f64,

    /// Month-by-month breakdown, one entry per month
    pub schedule: Vec<ScheduleEntry>,

    /// Last bank-required installment in effect (excluding overpayment);
    /// constant for the shorten-term strategy, the final recalculated value
    /// for the reduce-payment strategy
    pub final_installment: f64,
}

impl StrategyResult {
    pub fn new(final_installment: f64) -> Self {
        Self {
            months: 0,
            total_interest: 0.0,
            schedule: Vec::new(),
            final_installment,
        }
    }

    /// Record one simulated month
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.months = entry.month;
        self.total_interest += entry.interest;
        self.schedule.push(entry);
    }

    /// Balance after the last simulated month (zero for a fully repaid loan)
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|e| e.balance).unwrap_or(0.0)
    }

    /// Total principal repaid over the whole schedule
    pub fn total_principal(&self) -> f64 {
        self.schedule.iter().map(|e| e.principal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_entry_accumulates() {
        let mut result = StrategyResult::new(1000.0);
        result.add_entry(ScheduleEntry {
            month: 1,
            balance: 900.0,
            interest: 10.0,
            principal: 100.0,
            overpayment: 0.0,
        });
        result.add_entry(ScheduleEntry {
            month: 2,
            balance: 800.0,
            interest: 9.0,
            principal: 100.0,
            overpayment: 0.0,
        });

        assert_eq!(result.months, 2);
        assert_eq!(result.schedule.len(), 2);
        assert_relative_eq!(result.total_interest, 19.0);
        assert_relative_eq!(result.total_principal(), 200.0);
        assert_relative_eq!(result.final_balance(), 800.0);
    }

    #[test]
    fn test_empty_result() {
        let result = StrategyResult::new(1000.0);
        assert_eq!(result.months, 0);
        assert_eq!(result.final_balance(), 0.0);
    }
}
