use crate::core::error::AmortizationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terms of a fixed-rate loan repaid in equal monthly installments.
///
/// `additional_payment` is an extra amount paid every month on top of
/// `monthly_payment`. Parameters are immutable once built; the `with_*`
/// methods return a modified copy.
///
/// Construction never fails. Values are checked by [`LoanParameters::validate`],
/// which the amortization engine runs before generating a schedule.
///
/// # Examples
///
/// ```
/// use loan_amortizer::core::loan::LoanParameters;
/// use rust_decimal_macros::dec;
///
/// let loan = LoanParameters::new(dec!(100_000), dec!(5.0), dec!(1_500))
///     .with_additional_payment(dec!(500));
///
/// assert_eq!(loan.total_payment(), dec!(2_000));
/// assert!(loan.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed, in currency units.
    principal: Decimal,
    /// Nominal annual rate as a percentage (5.0 means 5%).
    annual_rate_percent: Decimal,
    /// Scheduled monthly payment.
    monthly_payment: Decimal,
    /// Extra amount paid each month.
    #[serde(default)]
    additional_payment: Decimal,
}

impl LoanParameters {
    /// Create loan parameters with no additional payment.
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, monthly_payment: Decimal) -> Self {
        Self {
            principal,
            annual_rate_percent,
            monthly_payment,
            additional_payment: Decimal::ZERO,
        }
    }

    /// Same loan with the given extra monthly payment.
    pub fn with_additional_payment(mut self, additional_payment: Decimal) -> Self {
        self.additional_payment = additional_payment;
        self
    }

    /// Same loan paying only the scheduled monthly payment.
    pub fn without_additional_payment(self) -> Self {
        self.with_additional_payment(Decimal::ZERO)
    }

    // --- Accessors ---

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn monthly_payment(&self) -> Decimal {
        self.monthly_payment
    }

    pub fn additional_payment(&self) -> Decimal {
        self.additional_payment
    }

    /// Monthly rate as a fraction: `annual_rate_percent / 100 / 12`.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
    }

    /// Scheduled plus additional payment.
    pub fn total_payment(&self) -> Decimal {
        self.monthly_payment + self.additional_payment
    }

    /// Check that a schedule for these terms exists and terminates.
    ///
    /// Fails with `InvalidInput` for negative amounts or values too large to
    /// compute with, and with `InvalidPayment` when the total payment does not
    /// exceed the interest accrued on the opening balance.
    pub fn validate(&self) -> Result<(), AmortizationError> {
        check_non_negative("principal", self.principal)?;
        check_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        check_non_negative("monthly_payment", self.monthly_payment)?;
        check_non_negative("additional_payment", self.additional_payment)?;

        let payment = self
            .monthly_payment
            .checked_add(self.additional_payment)
            .ok_or_else(|| AmortizationError::invalid_input("monthly_payment", "overflows"))?;
        let interest = self
            .principal
            .checked_mul(self.monthly_rate())
            .ok_or_else(|| AmortizationError::invalid_input("principal", "overflows"))?;

        if payment <= interest {
            return Err(AmortizationError::InvalidPayment { payment, interest });
        }
        Ok(())
    }
}

fn check_non_negative(field: &str, value: Decimal) -> Result<(), AmortizationError> {
    if value < Decimal::ZERO {
        return Err(AmortizationError::invalid_input(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

impl fmt::Display for LoanParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal {}, rate {}%, payment {} + {} extra",
            self.principal, self.annual_rate_percent, self.monthly_payment, self.additional_payment
        )
    }
}
