//! Ordered collection of simulated paths from one run.

use crate::entities::PathResult;
use crate::enums::RngStrategy;
use serde::{Deserialize, Serialize};

/// All paths produced by a single run, in path-index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationBatch {
    paths: Vec<PathResult>,
    strategy: RngStrategy,
    seed: u64,
}

impl SimulationBatch {
    /// Wraps generated paths together with how they were drawn.
    #[must_use]
    pub fn new(paths: Vec<PathResult>, strategy: RngStrategy, seed: u64) -> Self {
        Self {
            paths,
            strategy,
            seed,
        }
    }

    /// Paths in index order.
    #[must_use]
    pub fn paths(&self) -> &[PathResult] {
        &self.paths
    }

    /// Number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the batch holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Strategy used to draw the outcomes.
    #[must_use]
    pub fn strategy(&self) -> RngStrategy {
        self.strategy
    }

    /// Seed the run actually used, drawn fresh when none was configured.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Final P&L percentage of every path.
    #[must_use]
    pub fn final_pcts(&self) -> Vec<f64> {
        self.paths.iter().map(PathResult::final_pct).collect()
    }

    /// Maximum drawdown percentage of every path.
    #[must_use]
    pub fn max_drawdowns(&self) -> Vec<f64> {
        self.paths.iter().map(PathResult::max_drawdown_pct).collect()
    }

    /// Full equity matrix: one row per path, `trades + 1` columns.
    #[must_use]
    pub fn equity_matrix(&self) -> Vec<&[f64]> {
        self.paths.iter().map(PathResult::equity_curve).collect()
    }

    /// Number of paths with infinite or NaN equity.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.paths.iter().filter(|p| !p.is_finite()).count()
    }

    /// Number of paths whose equity reached zero or below.
    #[must_use]
    pub fn ruined_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_ruined()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_accessors() {
        let paths = vec![
            PathResult::from_curve(vec![100.0, 110.0], 100.0),
            PathResult::from_curve(vec![100.0, 90.0], 100.0),
        ];
        let batch = SimulationBatch::new(paths, RngStrategy::SequentialShared, 7);

        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
        assert_eq!(batch.seed(), 7);
        assert_eq!(batch.equity_matrix(), vec![&[100.0, 110.0][..], &[100.0, 90.0][..]]);
        assert!((batch.final_pcts()[0] - 10.0).abs() < 1e-9);
        assert!((batch.max_drawdowns()[1] - 10.0).abs() < 1e-9);
        assert_eq!(batch.ruined_count(), 0);
        assert_eq!(batch.non_finite_count(), 0);
    }
}
