//! Monte Carlo engine for fixed-fraction R-multiple strategies.
//!
//! This crate turns a validated configuration into equity paths and
//! summarizes them:
//! - Win/loss outcome sources (seeded generator or scripted)
//! - Single-path generation with compounding risk
//! - Batch runner with sequential or per-path random streams
//! - Cross-path statistics and the text report
//! - Curve sampling for external plotting and risk sweeps
//!
//! # Example
//!
//! ```rust
//! use rmc_simulation::prelude::*;
//!
//! let params = SimulationParams::default()
//!     .with_trades_per_path(50)
//!     .with_num_simulations(100);
//! let runner = MonteCarloRunner::from_params(params).unwrap();
//! let (batch, stats) = runner.run_summarized().unwrap();
//! assert_eq!(batch.len(), 100);
//! println!("{}", SummaryReport::new(&runner.config, &stats));
//! ```

/// Prelude module for convenient imports.
pub mod prelude;

/// Equity curve sampling.
pub mod curves;
/// Batch runner.
pub mod monte_carlo;
/// Trade outcome sources.
pub mod outcome;
/// Single path generation.
pub mod path;
/// Text report.
pub mod report;
/// Cross-path statistics.
pub mod summary;
/// Risk fraction sweeps.
pub mod sweep;
