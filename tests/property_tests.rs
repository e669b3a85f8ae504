use loan_amortizer::core::error::AmortizationError;
use loan_amortizer::core::loan::LoanParameters;
use loan_amortizer::engine::amortization::AmortizationEngine;
use loan_amortizer::report::comparison::ComparisonReport;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Principal between 1,000 and 1,000,000 in whole units.
fn arb_principal() -> impl Strategy<Value = Decimal> {
    (1_000u64..1_000_000u64).prop_map(Decimal::from)
}

/// Annual rate between 0.00% and 15.00%.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u32..=1_500u32).prop_map(|bp| Decimal::new(bp as i64, 2))
}

/// Extra monthly payment between 0 and 2,000.
fn arb_extra() -> impl Strategy<Value = Decimal> {
    (0u64..2_000u64).prop_map(Decimal::from)
}

/// A loan whose payment covers first-month interest by a margin of at least
/// 0.5% of principal, keeping schedules under ~200 months.
fn arb_loan() -> impl Strategy<Value = LoanParameters> {
    (arb_principal(), arb_rate(), 5u32..100u32).prop_map(|(principal, rate, margin_tenths)| {
        let probe = LoanParameters::new(principal, rate, Decimal::ZERO);
        let interest = principal * probe.monthly_rate();
        let margin = principal * Decimal::new(margin_tenths as i64, 3);
        LoanParameters::new(principal, rate, (interest + margin).round_dp(2))
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Balance never rises and ends at exactly zero.
    // ===================================================================
    #[test]
    fn balance_non_increasing_and_ends_at_zero(loan in arb_loan(), extra in arb_extra()) {
        let loan = loan.with_additional_payment(extra);
        let schedule = AmortizationEngine::generate_schedule(&loan).unwrap();

        let mut previous = loan.principal();
        for entry in &schedule {
            prop_assert!(entry.remaining_balance <= previous);
            prop_assert!(entry.remaining_balance >= Decimal::ZERO);
            previous = entry.remaining_balance;
        }
        prop_assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 2: Months are exactly 1..=N.
    // ===================================================================
    #[test]
    fn months_are_contiguous(loan in arb_loan()) {
        let schedule = AmortizationEngine::generate_schedule(&loan).unwrap();
        for (i, entry) in schedule.iter().enumerate() {
            prop_assert_eq!(entry.month as usize, i + 1);
        }
    }

    // ===================================================================
    // INVARIANT 3: Paying extra never costs time or interest.
    // ===================================================================
    #[test]
    fn extra_payment_never_hurts(loan in arb_loan(), extra in arb_extra()) {
        let comparison = ComparisonReport::from_parameters(&loan.with_additional_payment(extra)).unwrap();
        let summary = comparison.summary;
        prop_assert!(summary.months_with_extra <= summary.months_baseline);
        prop_assert!(summary.interest_with_extra <= summary.interest_baseline);
        prop_assert!(summary.time_saved_months >= 0);
        prop_assert!(summary.money_saved >= Decimal::ZERO);
    }

    // ===================================================================
    // INVARIANT 4: Summary fields are consistent with the schedules.
    // ===================================================================
    #[test]
    fn summary_matches_schedules(loan in arb_loan(), extra in arb_extra()) {
        let comparison = ComparisonReport::from_parameters(&loan.with_additional_payment(extra)).unwrap();
        let summary = comparison.summary;
        prop_assert_eq!(summary.months_baseline as usize, comparison.baseline.len());
        prop_assert_eq!(summary.months_with_extra as usize, comparison.with_extra.len());
        prop_assert_eq!(
            summary.time_saved_months,
            summary.months_baseline as i64 - summary.months_with_extra as i64
        );
        prop_assert_eq!(summary.interest_baseline, comparison.baseline.total_interest());
        prop_assert_eq!(
            summary.money_saved,
            summary.interest_baseline - summary.interest_with_extra
        );
    }

    // ===================================================================
    // INVARIANT 5: Recorded principal overshoots by less than one payment.
    // ===================================================================
    #[test]
    fn principal_overshoot_bounded(loan in arb_loan(), extra in arb_extra()) {
        let loan = loan.with_additional_payment(extra);
        let schedule = AmortizationEngine::generate_schedule(&loan).unwrap();
        let overshoot = schedule.total_principal() - loan.principal();
        // Allow for rounding at the 28th significant digit.
        prop_assert!(overshoot > -Decimal::new(1, 6));
        prop_assert!(overshoot < loan.total_payment());
    }

    // ===================================================================
    // INVARIANT 6: InvalidPayment exactly when payment <= first interest.
    // ===================================================================
    #[test]
    fn invalid_payment_boundary(
        principal in arb_principal(),
        rate in arb_rate(),
        payment in 0u64..20_000u64,
    ) {
        let loan = LoanParameters::new(principal, rate, Decimal::from(payment));
        let interest = principal * loan.monthly_rate();
        // Keep accepted schedules short enough to generate quickly.
        let payment_dec = Decimal::from(payment);
        prop_assume!(payment_dec <= interest || payment_dec - interest >= principal / Decimal::from(600));

        let result = AmortizationEngine::generate_schedule(&loan);
        if payment_dec <= interest {
            let is_invalid_payment = matches!(result, Err(AmortizationError::InvalidPayment { .. }));
            prop_assert!(is_invalid_payment);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    // ===================================================================
    // INVARIANT 7: Generation is deterministic.
    // ===================================================================
    #[test]
    fn generation_is_deterministic(loan in arb_loan()) {
        let a = AmortizationEngine::generate_schedule(&loan).unwrap();
        let b = AmortizationEngine::generate_schedule(&loan).unwrap();
        prop_assert_eq!(a, b);
    }
}
