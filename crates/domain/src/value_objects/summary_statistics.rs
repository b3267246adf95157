//! Distributional statistics over a simulation batch.

use serde::{Deserialize, Serialize};

/// Statistics of the final P&L percentage across paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnlStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Nearest-rank median.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Share of paths ending with P&L > 0, in percent.
    pub prob_profit_pct: f64,
}

/// Statistics of the maximum drawdown percentage across paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Nearest-rank median.
    pub median: f64,
    /// Nearest-rank 95th percentile.
    pub p95: f64,
}

/// Aggregate view over a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of paths summarized.
    pub paths: usize,
    /// Final P&L % statistics.
    pub pnl: PnlStatistics,
    /// Max drawdown % statistics.
    pub drawdown: DrawdownStatistics,
}
