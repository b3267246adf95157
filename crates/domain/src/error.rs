//! Error types for configuration and aggregation.

use thiserror::Error;

/// A simulation parameter outside its documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Starting capital must be finite and strictly positive.
    #[error("starting capital must be finite and > 0, got {0}")]
    InvalidStartingCapital(f64),
    /// R-multiple must be a finite number.
    #[error("R-multiple must be finite, got {0}")]
    InvalidRMultiple(f64),
    /// Hit rate must lie in [0, 1].
    #[error("hit rate must be within [0, 1], got {0}")]
    InvalidHitRate(f64),
    /// Risk fraction must lie in (0, 1].
    #[error("risk fraction must be within (0, 1], got {0}")]
    InvalidRiskFraction(f64),
    /// At least one trade per path is required.
    #[error("trades per path must be at least 1")]
    NoTrades,
    /// At least one path is required.
    #[error("number of simulations must be at least 1")]
    NoSimulations,
}

/// Errors surfaced by the simulation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The configuration was rejected before any path was generated.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    /// Statistics were requested over zero paths.
    #[error("cannot summarize an empty simulation batch")]
    EmptyBatch,
    /// Equity overflowed or became NaN, so the statistics would be meaningless.
    #[error("{paths} simulated paths produced non-finite equity")]
    NonFiniteResult {
        /// Number of affected paths.
        paths: usize,
    },
}
