use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single month of repayment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based month index.
    pub month: u32,
    /// Balance left after this month's payment. Never negative.
    pub remaining_balance: Decimal,
    /// Part of the payment applied to principal, recorded before the
    /// balance is clamped to zero.
    pub principal_paid: Decimal,
    /// Interest accrued on the opening balance of the month.
    pub interest_paid: Decimal,
}

impl ScheduleEntry {
    pub fn new(
        month: u32,
        remaining_balance: Decimal,
        principal_paid: Decimal,
        interest_paid: Decimal,
    ) -> Self {
        Self {
            month,
            remaining_balance,
            principal_paid,
            interest_paid,
        }
    }

    /// Principal plus interest for the month.
    pub fn payment(&self) -> Decimal {
        self.principal_paid + self.interest_paid
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, principal paid {:.2}, interest paid {:.2}, remaining balance {:.2}",
            self.month,
            self.principal_paid.round_dp(2),
            self.interest_paid.round_dp(2),
            self.remaining_balance.round_dp(2)
        )
    }
}

/// Month-by-month record of a loan being paid down, in chronological order.
///
/// Produced by [`AmortizationEngine`](crate::engine::amortization::AmortizationEngine)
/// and read-only afterwards. A schedule for a zero principal is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmortizationSchedule {
    entries: Vec<ScheduleEntry>,
}

impl AmortizationSchedule {
    pub(crate) fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    /// Number of months until payoff (the last entry's month), 0 if empty.
    pub fn months(&self) -> u32 {
        self.last().map(|e| e.month).unwrap_or(0)
    }

    /// Total interest paid over the life of the loan.
    pub fn total_interest(&self) -> Decimal {
        self.entries.iter().map(|e| e.interest_paid).sum()
    }

    /// Total principal recorded. May exceed the original principal by the
    /// final month's overpayment.
    pub fn total_principal(&self) -> Decimal {
        self.entries.iter().map(|e| e.principal_paid).sum()
    }

    /// Total of all payments made.
    pub fn total_paid(&self) -> Decimal {
        self.total_principal() + self.total_interest()
    }

    /// Calendar date of the final payment, given the date of the first one.
    ///
    /// Returns `None` for an empty schedule or if the date is out of range.
    pub fn payoff_date(&self, first_payment: NaiveDate) -> Option<NaiveDate> {
        let last = self.last()?;
        first_payment.checked_add_months(Months::new(last.month - 1))
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for AmortizationSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>16} {:>14} {:>14}",
            "Month", "Balance", "Principal", "Interest"
        )?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:>6} {:>16.2} {:>14.2} {:>14.2}",
                entry.month,
                entry.remaining_balance.round_dp(2),
                entry.principal_paid.round_dp(2),
                entry.interest_paid.round_dp(2)
            )?;
        }
        Ok(())
    }
}
