//! Sweep of extra monthly payments on a single loan.
//!
//! Prints months and interest saved for increasing extra payments.

use loan_amortizer::core::loan::LoanParameters;
use loan_amortizer::report::comparison::{format_amount, ComparisonReport};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  loan-amortizer: Extra Payment Sweep         ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let loan = LoanParameters::new(dec!(250_000), dec!(6.5), dec!(1_580.17));
    println!("Loan: {}\n", loan);
    println!(
        "{:>8} {:>8} {:>12} {:>16} {:>10}",
        "Extra", "Months", "Months saved", "Interest saved", "Saved %"
    );

    for extra in (0..=10).map(|i| Decimal::from(i * 100)) {
        match ComparisonReport::from_parameters(&loan.with_additional_payment(extra)) {
            Ok(comparison) => {
                let s = comparison.summary;
                println!(
                    "{:>8} {:>8} {:>12} {:>16} {:>9.1}%",
                    extra,
                    s.months_with_extra,
                    s.time_saved_months,
                    format_amount(s.money_saved),
                    s.interest_saved_percent()
                );
            }
            Err(e) => println!("{:>8} error: {}", extra, e),
        }
    }
}
