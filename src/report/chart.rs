//! Long-format series for charting a loan comparison.
//!
//! Both schedules are concatenated and tagged with the payment plan they
//! came from, so a plotting layer can draw one line per plan without
//! knowing about schedules.

use crate::core::schedule::AmortizationSchedule;
use crate::report::comparison::LoanComparison;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which schedule a chart point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "Without Additional Payment")]
    WithoutAdditional,
    #[serde(rename = "With Additional Payment")]
    WithAdditional,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::WithoutAdditional => write!(f, "Without Additional Payment"),
            PaymentType::WithAdditional => write!(f, "With Additional Payment"),
        }
    }
}

/// Part of a monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentComponent {
    #[serde(rename = "Principal Paid")]
    Principal,
    #[serde(rename = "Interest Paid")]
    Interest,
}

impl fmt::Display for PaymentComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentComponent::Principal => write!(f, "Principal Paid"),
            PaymentComponent::Interest => write!(f, "Interest Paid"),
        }
    }
}

/// Remaining balance at the end of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub month: u32,
    pub remaining_balance: Decimal,
    pub payment_type: PaymentType,
}

/// Amount of one payment component in a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPoint {
    pub month: u32,
    pub component: PaymentComponent,
    pub amount: Decimal,
    pub payment_type: PaymentType,
}

fn tagged(comparison: &LoanComparison) -> [(PaymentType, &AmortizationSchedule); 2] {
    [
        (PaymentType::WithoutAdditional, &comparison.baseline),
        (PaymentType::WithAdditional, &comparison.with_extra),
    ]
}

/// Remaining balance over time for both plans, baseline first.
pub fn balance_series(comparison: &LoanComparison) -> Vec<BalancePoint> {
    tagged(comparison)
        .into_iter()
        .flat_map(|(payment_type, schedule)| {
            schedule.iter().map(move |e| BalancePoint {
                month: e.month,
                remaining_balance: e.remaining_balance,
                payment_type,
            })
        })
        .collect()
}

/// Principal and interest over time for both plans.
///
/// Each schedule entry is folded into two points, principal then interest.
pub fn component_series(comparison: &LoanComparison) -> Vec<ComponentPoint> {
    tagged(comparison)
        .into_iter()
        .flat_map(|(payment_type, schedule)| {
            schedule.iter().flat_map(move |e| {
                [
                    (PaymentComponent::Principal, e.principal_paid),
                    (PaymentComponent::Interest, e.interest_paid),
                ]
                .into_iter()
                .map(move |(component, amount)| ComponentPoint {
                    month: e.month,
                    component,
                    amount,
                    payment_type,
                })
            })
        })
        .collect()
}
