//! Result of one simulated equity path.

use crate::metrics::drawdown::max_drawdown_pct;
use serde::{Deserialize, Serialize};

/// One simulated equity trajectory and the metrics derived from it.
///
/// Immutable once built; derived values are computed from the curve at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    equity_curve: Vec<f64>,
    final_equity: f64,
    final_pct: f64,
    max_drawdown_pct: f64,
}

impl PathResult {
    /// Builds a path result from a completed equity curve.
    ///
    /// # Arguments
    ///
    /// * `equity_curve` - Equity after each trade, with the starting capital first
    /// * `starting_capital` - Capital the path started with
    ///
    /// An empty curve is treated as a path that never traded.
    #[must_use]
    pub fn from_curve(equity_curve: Vec<f64>, starting_capital: f64) -> Self {
        let final_equity = equity_curve.last().copied().unwrap_or(starting_capital);
        let final_pct = (final_equity - starting_capital) / starting_capital * 100.0;
        let max_drawdown_pct = max_drawdown_pct(&equity_curve);
        Self {
            equity_curve,
            final_equity,
            final_pct,
            max_drawdown_pct,
        }
    }

    /// Equity after each trade, starting capital first.
    #[must_use]
    pub fn equity_curve(&self) -> &[f64] {
        &self.equity_curve
    }

    /// Equity after the last trade.
    #[must_use]
    pub fn final_equity(&self) -> f64 {
        self.final_equity
    }

    /// Final profit or loss as a percentage of starting capital.
    #[must_use]
    pub fn final_pct(&self) -> f64 {
        self.final_pct
    }

    /// Largest peak-to-trough decline along the path, in percent.
    #[must_use]
    pub fn max_drawdown_pct(&self) -> f64 {
        self.max_drawdown_pct
    }

    /// Number of trades in the path.
    #[must_use]
    pub fn trades(&self) -> usize {
        self.equity_curve.len().saturating_sub(1)
    }

    /// Whether every equity value and derived metric is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.final_pct.is_finite()
            && self.max_drawdown_pct.is_finite()
            && self.equity_curve.iter().all(|e| e.is_finite())
    }

    /// Whether equity reached zero or below at any point.
    #[must_use]
    pub fn is_ruined(&self) -> bool {
        self.equity_curve.iter().any(|&e| e <= 0.0)
    }
}
