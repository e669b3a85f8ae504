//! Random loan scenarios for benchmarks and batch testing.

use crate::core::loan::LoanParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Configuration for generating random loans.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Number of loans to generate.
    pub loan_count: usize,
    /// Principal range, in whole currency units.
    pub min_principal: u64,
    pub max_principal: u64,
    /// Annual rate range, in percent.
    pub min_rate_percent: f64,
    pub max_rate_percent: f64,
    /// Term range used to size the scheduled payment, in months.
    pub min_term_months: u32,
    pub max_term_months: u32,
    /// Upper bound on the extra monthly payment. Zero disables extras.
    pub max_additional_payment: u64,
    /// Seed for reproducible output. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            loan_count: 10,
            min_principal: 5_000,
            max_principal: 500_000,
            min_rate_percent: 0.0,
            max_rate_percent: 12.0,
            min_term_months: 12,
            max_term_months: 360,
            max_additional_payment: 1_000,
            seed: None,
        }
    }
}

/// Generate loans whose scheduled payment always covers first-month interest.
///
/// Each payment is the level annuity payment for a random term, rounded up
/// to the cent.
pub fn generate_random_loans(config: &ScenarioConfig) -> Vec<LoanParameters> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..config.loan_count)
        .map(|_| {
            let principal = rng.gen_range(config.min_principal..=config.max_principal);
            let rate = rng.gen_range(config.min_rate_percent..=config.max_rate_percent);
            let term = rng.gen_range(config.min_term_months..=config.max_term_months.max(1));
            let extra = rng.gen_range(0..=config.max_additional_payment);

            let principal = Decimal::from(principal);
            let rate = Decimal::from_f64(rate).unwrap_or_default().round_dp(2);
            let loan = LoanParameters::new(principal, rate, Decimal::ZERO);

            let payment = level_payment(loan.principal(), loan.monthly_rate(), term)
                .max(loan.principal() * loan.monthly_rate() + Decimal::new(1, 2))
                .round_dp_with_strategy(2, RoundingStrategy::AwayFromZero);
            LoanParameters::new(principal, rate, payment)
                .with_additional_payment(Decimal::from(extra))
        })
        .collect()
}

/// Level monthly payment that repays `principal` over `term` months.
fn level_payment(principal: Decimal, monthly_rate: Decimal, term: u32) -> Decimal {
    let term = term.max(1);
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term);
    }
    let p = principal.to_f64().unwrap_or(0.0);
    let r = monthly_rate.to_f64().unwrap_or(0.0);
    let factor = (1.0 + r).powi(term as i32);
    Decimal::from_f64(p * r * factor / (factor - 1.0)).unwrap_or(principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::amortization::AmortizationEngine;
    use crate::report::comparison::ComparisonReport;
    use rust_decimal_macros::dec;

    #[test]
    fn test_random_loan_generation() {
        let config = ScenarioConfig {
            loan_count: 25,
            seed: Some(7),
            ..Default::default()
        };
        let loans = generate_random_loans(&config);
        assert_eq!(loans.len(), 25);
        for loan in &loans {
            assert!(loan.validate().is_ok(), "invalid loan: {}", loan);
            assert!(loan.principal() >= dec!(5_000));
            assert!(loan.additional_payment() <= dec!(1_000));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = ScenarioConfig {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(generate_random_loans(&config), generate_random_loans(&config));
    }

    #[test]
    fn test_random_loans_compare() {
        let config = ScenarioConfig {
            loan_count: 10,
            seed: Some(3),
            ..Default::default()
        };
        for loan in generate_random_loans(&config) {
            let schedule = AmortizationEngine::generate_schedule(&loan).unwrap();
            assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);

            let comparison = ComparisonReport::from_parameters(&loan).unwrap();
            assert!(comparison.summary.time_saved_months >= 0);
        }
    }

    #[test]
    fn test_level_payment() {
        assert_eq!(level_payment(dec!(1_200), Decimal::ZERO, 12), dec!(100));
        // 200,000 at 7% over 180 months.
        let payment = level_payment(dec!(200_000), dec!(7) / dec!(1200), 180);
        assert!((payment - dec!(1797.66)).abs() < dec!(0.01));
    }
}
