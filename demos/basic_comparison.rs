//! Basic extra-payment comparison example.
//!
//! Shows how an extra 500 a month shortens a 100,000 loan at 5%.

use loan_amortizer::core::loan::LoanParameters;
use loan_amortizer::report::comparison::{format_amount, ComparisonReport};
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  loan-amortizer: Basic Comparison Example    ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let loan = LoanParameters::new(dec!(100_000), dec!(5.0), dec!(1_500))
        .with_additional_payment(dec!(500));
    println!("Loan: {}\n", loan);

    let comparison = match ComparisonReport::from_parameters(&loan) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", comparison.summary);

    println!("\n━━━ First 12 months, no additional payment ━━━\n");
    for entry in comparison.baseline.iter().take(12) {
        println!("  {}", entry);
    }

    println!("\n━━━ Final month of each plan ━━━\n");
    for (label, schedule) in [
        ("without extra", &comparison.baseline),
        ("with extra", &comparison.with_extra),
    ] {
        if let Some(last) = schedule.last() {
            println!("  {:<14} {}", label, last);
        }
        println!(
            "  {:<14} total paid {}",
            "",
            format_amount(schedule.total_paid())
        );
    }
}
