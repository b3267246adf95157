//! Domain model for fixed-fraction R-multiple Monte Carlo simulation.
//!
//! This crate holds the data types and pure numeric helpers:
//! - Validated simulation configuration
//! - Per-path results and the batch of paths from one run
//! - Summary statistics and the nearest-rank percentile they rely on
//! - Running-peak drawdown

/// Path entities.
pub mod entities;
/// Shared enums.
pub mod enums;
/// Error taxonomy.
pub mod error;
/// Numeric helpers.
pub mod metrics;
/// Value objects.
pub mod value_objects;

pub use error::{ConfigError, SimulationError};
