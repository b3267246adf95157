//! Numeric helpers shared by the path generator and the summarizer.

pub mod drawdown;
pub mod stats;
