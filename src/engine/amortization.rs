use crate::core::error::AmortizationError;
use crate::core::loan::LoanParameters;
use crate::core::schedule::{AmortizationSchedule, ScheduleEntry};
use log::{debug, trace, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Generates month-by-month amortization schedules.
pub struct AmortizationEngine;

impl AmortizationEngine {
    /// Build the repayment schedule for a loan.
    ///
    /// # Algorithm
    ///
    /// Starting from `balance = principal`, each month:
    ///
    /// 1. `interest = balance * monthly_rate`
    /// 2. `principal_paid = monthly_payment + additional_payment - interest`
    /// 3. `balance = max(0, balance - principal_paid)`
    /// 4. Record the month, stopping once the balance reaches zero.
    ///
    /// `principal_paid` is recorded before clamping, so the last entry may
    /// show more principal than was actually outstanding.
    ///
    /// A zero principal yields an empty schedule.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for negative amounts, `InvalidPayment` when the total
    /// payment cannot cover the first month's interest.
    ///
    /// # Examples
    ///
    /// ```
    /// use loan_amortizer::core::loan::LoanParameters;
    /// use loan_amortizer::engine::amortization::AmortizationEngine;
    /// use rust_decimal::Decimal;
    /// use rust_decimal_macros::dec;
    ///
    /// let loan = LoanParameters::new(dec!(1_000), dec!(0), dec!(100));
    /// let schedule = AmortizationEngine::generate_schedule(&loan).unwrap();
    ///
    /// assert_eq!(schedule.months(), 10);
    /// assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    /// ```
    pub fn generate_schedule(
        params: &LoanParameters,
    ) -> Result<AmortizationSchedule, AmortizationError> {
        if let Err(e) = params.validate() {
            warn!("rejecting loan ({}): {}", params, e);
            return Err(e);
        }

        let monthly_rate = params.monthly_rate();
        let payment = params.total_payment();
        let max_months = Self::month_bound(params)?;

        let mut balance = params.principal();
        let mut entries = Vec::new();
        let mut month: u32 = 0;

        while balance > Decimal::ZERO {
            if month >= max_months {
                // Unreachable for validated input: each month retires at least
                // the first month's margin over interest.
                return Err(AmortizationError::InvalidPayment {
                    payment,
                    interest: params.principal() * monthly_rate,
                });
            }
            month += 1;

            let interest = balance * monthly_rate;
            let principal_paid = payment - interest;
            balance = (balance - principal_paid).max(Decimal::ZERO);

            trace!(
                "month {}, interest {}, principal {}, balance {}",
                month,
                interest,
                principal_paid,
                balance
            );
            entries.push(ScheduleEntry::new(month, balance, principal_paid, interest));
        }

        debug!(
            "generated {} month schedule for {}",
            entries.len(),
            params
        );
        Ok(AmortizationSchedule::from_entries(entries))
    }

    /// Upper bound on the schedule length: `ceil(principal / margin)` where
    /// `margin` is the first month's payment in excess of interest.
    ///
    /// Interest only falls as the balance falls, so every month retires at
    /// least `margin` of principal.
    fn month_bound(params: &LoanParameters) -> Result<u32, AmortizationError> {
        let margin = params.total_payment() - params.principal() * params.monthly_rate();
        let months = params
            .principal()
            .checked_div(margin)
            .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::AwayFromZero))
            .ok_or_else(|| AmortizationError::invalid_input("principal", "overflows"))?;

        // One month of slack absorbs rounding in the monthly rate.
        months
            .to_u32()
            .and_then(|m| m.checked_add(1))
            .ok_or_else(|| {
                AmortizationError::invalid_input(
                    "monthly_payment",
                    format!("schedule would exceed {} months", u32::MAX),
                )
            })
    }
}
