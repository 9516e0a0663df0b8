//! Sweep overpayment levels for one loan
//!
//! Runs both strategies at each overpayment level in parallel and writes a
//! per-level comparison table for plotting.

use anyhow::Context;
use clap::Parser;
use mortgage_overpayment::{monthly_rate_from_annual_pct, LoanTerms, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(
    name = "sweep_overpayments",
    about = "Sweep monthly overpayment levels and compare both strategies"
)]
struct Args {
    /// Loan principal in currency units
    #[arg(long, default_value_t = 500_000.0)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 7.0)]
    annual_rate: f64,

    /// Loan term in months
    #[arg(long, default_value_t = 300)]
    months: u32,

    /// First overpayment level of the sweep
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last overpayment level of the sweep (inclusive)
    #[arg(long, default_value_t = 2000.0)]
    to: f64,

    /// Step between overpayment levels
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Output CSV path
    #[arg(long, default_value = "overpayment_sweep.csv")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    anyhow::ensure!(args.step > 0.0, "sweep step must be positive");
    anyhow::ensure!(args.to >= args.from, "sweep range is empty");

    let terms = LoanTerms::new(
        args.principal,
        monthly_rate_from_annual_pct(args.annual_rate),
        args.months,
        0.0,
    );
    let runner = ScenarioRunner::new(terms);

    let mut levels = Vec::new();
    let mut level = args.from;
    while level <= args.to + 1e-9 {
        levels.push(level);
        level += args.step;
    }

    println!("Sweeping {} overpayment levels...", levels.len());
    let start = Instant::now();

    // Each comparison is independent, so run the sweep in parallel
    let results = levels
        .par_iter()
        .map(|&op| runner.run_with_overpayment(op))
        .collect::<Result<Vec<_>, _>>()
        .context("sweep failed")?;

    println!("Sweep complete in {:?}\n", start.elapsed());

    println!(
        "{:>12} {:>9} {:>14} {:>9} {:>14} {:>14}",
        "Overpayment", "A months", "A saved", "B months", "B saved", "B installment"
    );
    for c in &results {
        println!(
            "{:>12.2} {:>9} {:>14.2} {:>9} {:>14.2} {:>14.2}",
            c.terms.overpayment,
            c.shorten_term.months,
            c.shorten_term_savings(),
            c.reduce_payment.months,
            c.reduce_payment_savings(),
            c.reduce_payment.final_installment,
        );
    }

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output))?;
    writeln!(
        file,
        "Overpayment,BaseInstallment,BaselineInterest,A_Months,A_TotalInterest,A_InterestSaved,B_Months,B_TotalInterest,B_InterestSaved,B_FinalInstallment"
    )?;
    for c in &results {
        writeln!(
            file,
            "{:.2},{:.2},{:.2},{},{:.2},{:.2},{},{:.2},{:.2},{:.2}",
            c.terms.overpayment,
            c.base_installment,
            c.baseline_interest,
            c.shorten_term.months,
            c.shorten_term.total_interest,
            c.shorten_term_savings(),
            c.reduce_payment.months,
            c.reduce_payment.total_interest,
            c.reduce_payment_savings(),
            c.reduce_payment.final_installment,
        )?;
    }

    println!("\nOutput written to {}", args.output);
    Ok(())
}
