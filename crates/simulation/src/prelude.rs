//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use rmc_simulation::prelude::*;
//! ```

// Curve sampling
pub use crate::curves::{CurveSample, DEFAULT_CURVE_SAMPLE, sample_curve_indices, sample_curves};

// Monte Carlo
pub use crate::monte_carlo::{MonteCarloRunner, simulate};

// Outcome sources
pub use crate::outcome::{BernoulliOutcomes, OutcomeSource, ScriptedOutcomes};

// Path generation
pub use crate::path::{PathGenerator, apply_trade};

// Reporting
pub use crate::report::SummaryReport;

// Statistics
pub use crate::summary::summarize;

// Sweeps
pub use crate::sweep::{SweepRow, sweep_risk_fractions};

// Domain types
pub use rmc_domain::entities::PathResult;
pub use rmc_domain::enums::RngStrategy;
pub use rmc_domain::value_objects::{
    DrawdownStatistics, PnlStatistics, SimulationBatch, SimulationConfig, SimulationParams,
    SummaryStatistics,
};
pub use rmc_domain::{ConfigError, SimulationError};
