//! CSV export of schedules and chart series.
//!
//! Amounts are written rounded to cents; the in-memory values keep full
//! precision.

use crate::core::schedule::AmortizationSchedule;
use crate::report::chart::{BalancePoint, ComponentPoint};
use rust_decimal::Decimal;
use std::io::Write;

fn cents(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Write a schedule as CSV: `month,remaining_balance,principal_paid,interest_paid`.
pub fn write_schedule_csv<W: Write>(schedule: &AmortizationSchedule, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["month", "remaining_balance", "principal_paid", "interest_paid"])?;
    for entry in schedule {
        wtr.write_record([
            entry.month.to_string(),
            cents(entry.remaining_balance),
            cents(entry.principal_paid),
            cents(entry.interest_paid),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write balance chart points as CSV: `month,remaining_balance,payment_type`.
pub fn write_balance_csv<W: Write>(points: &[BalancePoint], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["month", "remaining_balance", "payment_type"])?;
    for p in points {
        wtr.write_record([
            p.month.to_string(),
            cents(p.remaining_balance),
            p.payment_type.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write component chart points as CSV: `month,component,amount,payment_type`.
pub fn write_component_csv<W: Write>(points: &[ComponentPoint], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["month", "component", "amount", "payment_type"])?;
    for p in points {
        wtr.write_record([
            p.month.to_string(),
            p.component.to_string(),
            cents(p.amount),
            p.payment_type.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
