//! loan-amortizer CLI
//!
//! Compare repayment with and without an extra monthly payment.
//!
//! # Usage
//!
//! ```bash
//! # Savings from paying 500 extra per month
//! loan-amortizer compare --principal 100000 --rate 5 --payment 1500 --extra 500
//!
//! # Full schedules and payoff dates
//! loan-amortizer compare --extra 500 --start-date 2025-01-01 --show-schedule
//!
//! # One schedule as CSV
//! loan-amortizer schedule --principal 25000 --rate 7.5 --payment 600 --format csv
//!
//! # Summaries for every loan in a file
//! loan-amortizer batch --input loans.json
//!
//! # Generate a random loan file
//! loan-amortizer generate --count 20 --seed 1 --output loans.json
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use loan_amortizer::core::loan::LoanParameters;
use loan_amortizer::core::schedule::AmortizationSchedule;
use loan_amortizer::engine::amortization::AmortizationEngine;
use loan_amortizer::report::chart::balance_series;
use loan_amortizer::report::comparison::{
    format_amount, ComparisonReport, ComparisonSummary, LoanComparison,
};
use loan_amortizer::report::export::{write_balance_csv, write_schedule_csv};
use loan_amortizer::simulation::scenarios::{generate_random_loans, ScenarioConfig};
use log::{info, warn};
use rust_decimal::Decimal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "loan-amortizer",
    version,
    about = "Loan repayment calculator with principal and interest breakdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare repayment with and without the additional payment
    Compare {
        #[command(flatten)]
        loan: LoanArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print both schedules (text format only)
        #[arg(long, default_value_t = false)]
        show_schedule: bool,

        /// Date of the first payment, used to report payoff dates (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Print the schedule for the loan as given, including any extra payment
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Compare every loan in a JSON file
    Batch {
        /// Path to JSON loans file
        #[arg(long)]
        input: PathBuf,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate a random loans file (for testing)
    Generate {
        /// Number of loans
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Largest extra monthly payment
        #[arg(long, default_value_t = 1_000)]
        max_extra: u64,

        /// Write to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Loan terms. Defaults match a 100,000 loan at 5% repaid at 1,500 a month.
#[derive(Args)]
struct LoanArgs {
    /// Loan amount
    #[arg(long, default_value = "100000")]
    principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long, default_value = "5.0")]
    rate: Decimal,

    /// Scheduled monthly payment
    #[arg(long, default_value = "1500")]
    payment: Decimal,

    /// Additional monthly payment
    #[arg(long, default_value = "0")]
    extra: Decimal,
}

impl LoanArgs {
    fn to_parameters(&self) -> LoanParameters {
        LoanParameters::new(self.principal, self.rate, self.payment)
            .with_additional_payment(self.extra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// JSON schema for batch input and `generate` output.
#[derive(serde::Deserialize, serde::Serialize)]
struct LoansFile {
    loans: Vec<LoanParameters>,
}

/// JSON output for one batch entry.
#[derive(serde::Serialize)]
struct BatchOutput {
    loan: LoanParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ComparisonSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing output")?
    );
    Ok(())
}

fn print_payoff_dates(comparison: &LoanComparison, start: NaiveDate) {
    let dates = [
        ("No additional payment", &comparison.baseline),
        ("Additional payment", &comparison.with_extra),
    ];
    for (label, schedule) in dates {
        match schedule.payoff_date(start) {
            Some(date) => println!("{:<24} paid off {}", label, date),
            None => println!("{:<24} payoff date out of range", label),
        }
    }
}

fn print_schedule(title: &str, schedule: &AmortizationSchedule) {
    println!("\n--- {} ---", title);
    print!("{}", schedule);
    println!(
        "Total interest: {}   Total paid: {}",
        format_amount(schedule.total_interest()),
        format_amount(schedule.total_paid())
    );
}

fn cmd_compare(
    loan: &LoanParameters,
    format: OutputFormat,
    show_schedule: bool,
    start_date: Option<NaiveDate>,
) -> Result<()> {
    loan.validate()?;
    if loan.principal().is_zero() {
        println!("Loan amount is zero: nothing to repay.");
        return Ok(());
    }

    let comparison = ComparisonReport::from_parameters(loan)?;
    info!(
        "compared {}: {} months saved",
        loan, comparison.summary.time_saved_months
    );

    match format {
        OutputFormat::Json => print_json(&comparison)?,
        OutputFormat::Csv => write_balance_csv(&balance_series(&comparison), io::stdout().lock())
            .context("writing CSV")?,
        OutputFormat::Text => {
            print!("{}", comparison.summary);
            if let Some(start) = start_date {
                println!();
                print_payoff_dates(&comparison, start);
            }
            if show_schedule {
                print_schedule("No Additional Payment", &comparison.baseline);
                print_schedule("Additional Payment", &comparison.with_extra);
            }
        }
    }
    Ok(())
}

fn cmd_schedule(loan: &LoanParameters, format: OutputFormat) -> Result<()> {
    let schedule = AmortizationEngine::generate_schedule(loan)?;
    match format {
        OutputFormat::Json => print_json(&schedule)?,
        OutputFormat::Csv => {
            write_schedule_csv(&schedule, io::stdout().lock()).context("writing CSV")?
        }
        OutputFormat::Text => print_schedule(&loan.to_string(), &schedule),
    }
    Ok(())
}

fn cmd_batch(path: &Path, format: OutputFormat) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading file '{}'", path.display()))?;
    let file: LoansFile = serde_json::from_str(&content).with_context(|| {
        r#"parsing JSON; expected { "loans": [ { "principal": "100000", "annual_rate_percent": "5", "monthly_payment": "1500", "additional_payment": "500" } ] }"#
    })?;

    let mut outputs = Vec::with_capacity(file.loans.len());
    for loan in file.loans {
        let output = match ComparisonReport::from_parameters(&loan) {
            Ok(comparison) => BatchOutput {
                loan,
                summary: Some(comparison.summary),
                error: None,
            },
            Err(e) => {
                warn!("skipping loan ({}): {}", loan, e);
                BatchOutput {
                    loan,
                    summary: None,
                    error: Some(e.to_string()),
                }
            }
        };
        outputs.push(output);
    }

    if format == OutputFormat::Json {
        return print_json(&outputs);
    }

    for (i, output) in outputs.iter().enumerate() {
        println!("Loan {}: {}", i + 1, output.loan);
        match (&output.summary, &output.error) {
            (Some(summary), _) => println!(
                "  {} months saved, {} interest saved ({} -> {} months)",
                summary.time_saved_months,
                format_amount(summary.money_saved),
                summary.months_baseline,
                summary.months_with_extra
            ),
            (None, Some(error)) => println!("  Error: {}", error),
            (None, None) => {}
        }
    }
    Ok(())
}

fn cmd_generate(
    count: usize,
    seed: Option<u64>,
    max_extra: u64,
    output: Option<&Path>,
) -> Result<()> {
    let config = ScenarioConfig {
        loan_count: count,
        max_additional_payment: max_extra,
        seed,
        ..Default::default()
    };
    let file = LoansFile {
        loans: generate_random_loans(&config),
    };
    let json = serde_json::to_string_pretty(&file).context("serializing loans")?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("writing to '{}'", path.display()))?;
            eprintln!("Generated {} loans → {}", file.loans.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &cli.command {
        Commands::Compare {
            loan,
            format,
            show_schedule,
            start_date,
        } => cmd_compare(&loan.to_parameters(), *format, *show_schedule, *start_date),
        Commands::Schedule { loan, format } => cmd_schedule(&loan.to_parameters(), *format),
        Commands::Batch { input, format } => cmd_batch(input, *format),
        Commands::Generate {
            count,
            seed,
            max_extra,
            output,
        } => cmd_generate(*count, *seed, *max_extra, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
