use crate::core::error::AmortizationError;
use crate::core::loan::LoanParameters;
use crate::core::schedule::AmortizationSchedule;
use crate::engine::amortization::AmortizationEngine;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Savings from paying extra each month, derived from two schedules of the
/// same loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Months to repay with the scheduled payment only.
    pub months_baseline: u32,
    /// Months to repay with the additional payment.
    pub months_with_extra: u32,
    /// `months_baseline - months_with_extra`. Zero when no extra is paid.
    pub time_saved_months: i64,
    /// Total interest with the scheduled payment only.
    pub interest_baseline: Decimal,
    /// Total interest with the additional payment.
    pub interest_with_extra: Decimal,
    /// `interest_baseline - interest_with_extra`.
    pub money_saved: Decimal,
}

impl ComparisonSummary {
    /// Interest saved as a percentage of baseline interest.
    pub fn interest_saved_percent(&self) -> f64 {
        if self.interest_baseline == Decimal::ZERO {
            return 0.0;
        }
        let pct = self.money_saved * Decimal::ONE_HUNDRED / self.interest_baseline;
        pct.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "By making additional payments, you can repay the loan {} months earlier!",
            self.time_saved_months
        )?;
        writeln!(
            f,
            "You will also save {} in interest payments!",
            format_amount(self.money_saved)
        )?;
        writeln!(f)?;
        writeln!(f, "=== Comparison ===")?;
        writeln!(
            f,
            "Months:   {} without extra, {} with extra",
            self.months_baseline, self.months_with_extra
        )?;
        writeln!(
            f,
            "Interest: {} without extra, {} with extra",
            format_amount(self.interest_baseline),
            format_amount(self.interest_with_extra)
        )?;
        writeln!(
            f,
            "Interest saved: {:.1}%",
            self.interest_saved_percent()
        )
    }
}

/// Baseline and with-extra schedules of one loan, with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub summary: ComparisonSummary,
    pub baseline: AmortizationSchedule,
    pub with_extra: AmortizationSchedule,
}

/// Derives comparison statistics from amortization schedules.
pub struct ComparisonReport;

impl ComparisonReport {
    /// Compare a baseline schedule against one paying extra each month.
    ///
    /// Fails with `InvalidInput` if either schedule is empty.
    pub fn compare(
        baseline: &AmortizationSchedule,
        with_extra: &AmortizationSchedule,
    ) -> Result<ComparisonSummary, AmortizationError> {
        let months_baseline = last_month(baseline, "baseline")?;
        let months_with_extra = last_month(with_extra, "with_extra")?;

        let interest_baseline = baseline.total_interest();
        let interest_with_extra = with_extra.total_interest();

        Ok(ComparisonSummary {
            months_baseline,
            months_with_extra,
            time_saved_months: i64::from(months_baseline) - i64::from(months_with_extra),
            interest_baseline,
            interest_with_extra,
            money_saved: interest_baseline - interest_with_extra,
        })
    }

    /// Run the full pipeline for one loan.
    ///
    /// The baseline drops `additional_payment`; the second schedule uses the
    /// parameters as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use loan_amortizer::core::loan::LoanParameters;
    /// use loan_amortizer::report::comparison::ComparisonReport;
    /// use rust_decimal_macros::dec;
    ///
    /// let loan = LoanParameters::new(dec!(100_000), dec!(5.0), dec!(1_500))
    ///     .with_additional_payment(dec!(500));
    /// let comparison = ComparisonReport::from_parameters(&loan).unwrap();
    ///
    /// assert_eq!(comparison.summary.months_baseline, 79);
    /// assert_eq!(comparison.summary.months_with_extra, 57);
    /// assert_eq!(comparison.summary.time_saved_months, 22);
    /// ```
    pub fn from_parameters(params: &LoanParameters) -> Result<LoanComparison, AmortizationError> {
        let baseline = AmortizationEngine::generate_schedule(&params.without_additional_payment())?;
        let with_extra = AmortizationEngine::generate_schedule(params)?;
        let summary = Self::compare(&baseline, &with_extra)?;
        Ok(LoanComparison {
            summary,
            baseline,
            with_extra,
        })
    }
}

fn last_month(schedule: &AmortizationSchedule, field: &str) -> Result<u32, AmortizationError> {
    schedule
        .last()
        .map(|e| e.month)
        .ok_or_else(|| AmortizationError::invalid_input(field, "schedule has no entries"))
}

/// Format an amount with thousands separators and two decimals.
///
/// ```
/// use loan_amortizer::report::comparison::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(5027.3610)), "5,027.36");
/// assert_eq!(format_amount(dec!(-1234567.5)), "-1,234,567.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::ScheduleEntry;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn schedule(interest: &[Decimal]) -> AmortizationSchedule {
        let entries = interest
            .iter()
            .enumerate()
            .map(|(i, &int)| ScheduleEntry::new(i as u32 + 1, Decimal::ZERO, dec!(100), int))
            .collect();
        AmortizationSchedule::from_entries(entries)
    }

    #[test]
    fn test_compare_basic() {
        let baseline = schedule(&[dec!(10), dec!(8), dec!(6), dec!(4)]);
        let with_extra = schedule(&[dec!(10), dec!(5)]);

        let summary = ComparisonReport::compare(&baseline, &with_extra).unwrap();
        assert_eq!(summary.months_baseline, 4);
        assert_eq!(summary.months_with_extra, 2);
        assert_eq!(summary.time_saved_months, 2);
        assert_eq!(summary.interest_baseline, dec!(28));
        assert_eq!(summary.interest_with_extra, dec!(15));
        assert_eq!(summary.money_saved, dec!(13));
    }

    #[test]
    fn test_compare_negative_time_saved() {
        let baseline = schedule(&[dec!(1)]);
        let with_extra = schedule(&[dec!(1), dec!(1), dec!(1)]);

        let summary = ComparisonReport::compare(&baseline, &with_extra).unwrap();
        assert_eq!(summary.time_saved_months, -2);
        assert_eq!(summary.money_saved, dec!(-2));
    }

    #[test]
    fn test_compare_empty_schedule() {
        let full = schedule(&[dec!(1)]);
        let empty = AmortizationSchedule::default();

        assert!(matches!(
            ComparisonReport::compare(&empty, &full),
            Err(AmortizationError::InvalidInput { ref field, .. }) if field == "baseline"
        ));
        assert!(matches!(
            ComparisonReport::compare(&full, &empty),
            Err(AmortizationError::InvalidInput { ref field, .. }) if field == "with_extra"
        ));
    }

    #[test]
    fn test_from_parameters_no_extra() {
        let loan = LoanParameters::new(dec!(10_000), dec!(6), dec!(500));
        let comparison = ComparisonReport::from_parameters(&loan).unwrap();

        assert_eq!(comparison.baseline, comparison.with_extra);
        assert_eq!(comparison.summary.time_saved_months, 0);
        assert_eq!(comparison.summary.money_saved, Decimal::ZERO);
    }

    #[test]
    fn test_interest_saved_percent() {
        let baseline = schedule(&[dec!(50), dec!(50)]);
        let with_extra = schedule(&[dec!(25)]);
        let summary = ComparisonReport::compare(&baseline, &with_extra).unwrap();
        assert_relative_eq!(summary.interest_saved_percent(), 75.0);
    }

    #[test]
    fn test_interest_saved_percent_zero_rate() {
        let summary = ComparisonReport::compare(&schedule(&[dec!(0)]), &schedule(&[dec!(0)])).unwrap();
        assert_eq!(summary.interest_saved_percent(), 0.0);
    }

    #[test]
    fn test_summary_headline() {
        let loan = LoanParameters::new(dec!(100_000), dec!(5.0), dec!(1_500))
            .with_additional_payment(dec!(500));
        let comparison = ComparisonReport::from_parameters(&loan).unwrap();
        let text = comparison.summary.to_string();

        assert!(text.contains("repay the loan 22 months earlier"));
        assert!(text.contains("save 5,027.36 in interest payments"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(dec!(999.999)), "1,000.00");
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(123456)), "123,456.00");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }
}
