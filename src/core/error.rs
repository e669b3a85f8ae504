use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while generating or comparing amortization schedules.
///
/// Both kinds are caller input problems. Generation is deterministic, so
/// retrying with the same parameters always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmortizationError {
    #[error("invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("monthly payment {payment} does not exceed first-month interest {interest}; the loan would never be repaid")]
    InvalidPayment { payment: Decimal, interest: Decimal },
}

impl AmortizationError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        AmortizationError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
