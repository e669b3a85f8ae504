pub mod chart;
pub mod comparison;
pub mod export;
