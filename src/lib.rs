//! # loan-amortizer
//!
//! Loan amortization schedules and extra-payment savings comparison.
//!
//! Given a principal, an annual rate and a monthly payment, this crate
//! generates the month-by-month repayment schedule, and compares it with the
//! schedule obtained by paying an additional amount every month.
//!
//! ## Architecture
//!
//! - **core** — Loan parameters, schedule entries, errors
//! - **engine** — The amortization schedule generator
//! - **report** — Comparison summary, chart series, CSV export
//! - **simulation** — Random loan scenarios for benchmarks and batch runs

pub mod core;
pub mod engine;
pub mod report;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::AmortizationError;
    pub use crate::core::loan::LoanParameters;
    pub use crate::core::schedule::{AmortizationSchedule, ScheduleEntry};
    pub use crate::engine::amortization::AmortizationEngine;
    pub use crate::report::comparison::{ComparisonReport, ComparisonSummary, LoanComparison};
}
