//! Mortgage Overpayment CLI
//!
//! Command-line interface for comparing overpayment strategies on one loan

use anyhow::Context;
use chrono::{Months, NaiveDate};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use mortgage_overpayment::{
    monthly_rate_from_annual_pct, LoanTerms, ScenarioRunner, StrategyComparison, StrategyResult,
};

#[derive(Debug, Parser)]
#[command(
    name = "mortgage_overpayment",
    about = "Compare mortgage overpayment strategies for an annuity loan"
)]
struct Args {
    /// Loan principal in currency units
    #[arg(long, default_value_t = 500_000.0)]
    principal: f64,

    /// Annual interest rate in percent (e.g. 7.0)
    #[arg(long, default_value_t = 7.0)]
    annual_rate: f64,

    /// Loan term in months
    #[arg(long, default_value_t = 300)]
    months: u32,

    /// Monthly overpayment in currency units
    #[arg(long, default_value_t = 500.0)]
    overpayment: f64,

    /// First payment date (YYYY-MM-DD); adds payoff dates to the report
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write both amortization schedules to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Emit the full comparison as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

/// One exported schedule row, tagged with its strategy
#[derive(Debug, Serialize)]
struct ScheduleCsvRow<'a> {
    strategy: &'a str,
    month: u32,
    balance: f64,
    interest: f64,
    principal: f64,
    overpayment: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let terms = LoanTerms::new(
        args.principal,
        monthly_rate_from_annual_pct(args.annual_rate),
        args.months,
        args.overpayment,
    );
    let comparison = ScenarioRunner::new(terms)
        .run()
        .context("simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_report(&args, &comparison);
    }

    if let Some(path) = &args.csv {
        write_schedules_csv(path, &comparison)
            .with_context(|| format!("writing schedules to {}", path.display()))?;
        if !args.json {
            println!("\nFull schedules written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(args: &Args, comparison: &StrategyComparison) {
    println!("Mortgage Overpayment Calculator v0.1.0");
    println!("======================================\n");

    println!("Loan:");
    println!("  Principal:        {:>12.2}", args.principal);
    println!("  Annual rate:      {:>11.2}%", args.annual_rate);
    println!("  Term:             {:>9} months", args.months);
    println!("  Overpayment:      {:>12.2}/month", args.overpayment);
    println!(
        "  Base installment: {:>12.2}/month\n",
        comparison.base_installment
    );
    println!(
        "Baseline interest over full term: {:.2}\n",
        comparison.baseline_interest
    );

    let a = &comparison.shorten_term;
    println!("Strategy A: shorten term (pay more, finish earlier)");
    println!(
        "  Time saved:       {} years {} months",
        comparison.months_saved() / 12,
        comparison.months_saved() % 12
    );
    println!("  Interest saved:   {:>12.2}", comparison.shorten_term_savings());
    println!(
        "  Monthly payment:  {:>12.2}",
        comparison.base_installment + args.overpayment
    );
    println!("  Months to repay:  {:>6}", a.months);
    if let Some(date) = payoff_date(args.start_date, a) {
        println!("  Paid off:         {}", date);
    }
    println!();

    let b = &comparison.reduce_payment;
    println!("Strategy B: reduce payment (installment falls each month)");
    println!("  Final installment:{:>12.2}", b.final_installment);
    println!(
        "  Installment drop: {:>12.2}",
        comparison.installment_reduction()
    );
    println!(
        "  Interest saved:   {:>12.2}",
        comparison.reduce_payment_savings()
    );
    println!("  Months to repay:  {:>6}", b.months);
    if let Some(date) = payoff_date(args.start_date, b) {
        println!("  Paid off:         {}", date);
    }

    // First year of the shorten-term schedule for a quick sanity read
    println!("\nStrategy A schedule (first 12 months):");
    println!(
        "{:>5} {:>14} {:>12} {:>12} {:>12}",
        "Month", "Balance", "Interest", "Principal", "Overpayment"
    );
    for entry in a.schedule.iter().take(12) {
        println!(
            "{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2}",
            entry.month, entry.balance, entry.interest, entry.principal, entry.overpayment
        );
    }
    if a.schedule.len() > 12 {
        println!("... ({} more months)", a.schedule.len() - 12);
    }
}

/// Calendar date of a strategy's final payment, if a start date was given
fn payoff_date(start_date: Option<NaiveDate>, result: &StrategyResult) -> Option<NaiveDate> {
    let start = start_date?;
    if result.months == 0 {
        return Some(start);
    }
    start.checked_add_months(Months::new(result.months - 1))
}

fn write_schedules_csv(path: &PathBuf, comparison: &StrategyComparison) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (strategy, result) in [
        ("shorten_term", &comparison.shorten_term),
        ("reduce_payment", &comparison.reduce_payment),
    ] {
        for entry in &result.schedule {
            writer.serialize(ScheduleCsvRow {
                strategy,
                month: entry.month,
                balance: entry.balance,
                interest: entry.interest,
                principal: entry.principal,
                overpayment: entry.overpayment,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
