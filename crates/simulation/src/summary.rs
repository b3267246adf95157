//! Cross-path statistics for a completed batch.

use rmc_domain::SimulationError;
use rmc_domain::metrics::stats::{
    mean, nearest_rank_percentile, population_std, share_positive_pct, sorted,
};
use rmc_domain::value_objects::{
    DrawdownStatistics, PnlStatistics, SimulationBatch, SummaryStatistics,
};
use tracing::debug;

/// Summarizes final P&L and max drawdown across all paths of a batch.
///
/// Medians and the 95th percentile use nearest-rank selection.
///
/// # Errors
///
/// Returns [`SimulationError::EmptyBatch`] if the batch holds no paths and
/// [`SimulationError::NonFiniteResult`] if any path overflowed.
pub fn summarize(batch: &SimulationBatch) -> Result<SummaryStatistics, SimulationError> {
    if batch.is_empty() {
        return Err(SimulationError::EmptyBatch);
    }
    let non_finite = batch.non_finite_count();
    if non_finite > 0 {
        return Err(SimulationError::NonFiniteResult { paths: non_finite });
    }

    let finals = batch.final_pcts();
    let drawdowns = batch.max_drawdowns();
    let sorted_finals = sorted(&finals);
    let sorted_drawdowns = sorted(&drawdowns);

    let pnl = PnlStatistics {
        mean: mean(&finals).ok_or(SimulationError::EmptyBatch)?,
        median: nearest_rank_percentile(&sorted_finals, 0.5).ok_or(SimulationError::EmptyBatch)?,
        std_dev: population_std(&finals).ok_or(SimulationError::EmptyBatch)?,
        prob_profit_pct: share_positive_pct(&finals).ok_or(SimulationError::EmptyBatch)?,
    };
    let drawdown = DrawdownStatistics {
        mean: mean(&drawdowns).ok_or(SimulationError::EmptyBatch)?,
        median: nearest_rank_percentile(&sorted_drawdowns, 0.5)
            .ok_or(SimulationError::EmptyBatch)?,
        p95: nearest_rank_percentile(&sorted_drawdowns, 0.95)
            .ok_or(SimulationError::EmptyBatch)?,
    };

    debug!(
        pnl_mean = pnl.mean,
        pnl_median = pnl.median,
        prob_profit = pnl.prob_profit_pct,
        dd_p95 = drawdown.p95,
        "Summarized batch"
    );

    Ok(SummaryStatistics {
        paths: batch.len(),
        pnl,
        drawdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmc_domain::entities::PathResult;
    use rmc_domain::enums::RngStrategy;

    fn batch_from_finals(finals: &[f64]) -> SimulationBatch {
        let paths = finals
            .iter()
            .map(|&f| PathResult::from_curve(vec![100.0, f], 100.0))
            .collect();
        SimulationBatch::new(paths, RngStrategy::SequentialShared, 0)
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let batch = SimulationBatch::new(Vec::new(), RngStrategy::SequentialShared, 0);
        assert_eq!(summarize(&batch), Err(SimulationError::EmptyBatch));
    }

    #[test]
    fn test_non_finite_paths_are_an_error() {
        let paths = vec![
            PathResult::from_curve(vec![100.0, 110.0], 100.0),
            PathResult::from_curve(vec![100.0, f64::INFINITY, f64::NAN], 100.0),
        ];
        let batch = SimulationBatch::new(paths, RngStrategy::SequentialShared, 0);
        assert_eq!(
            summarize(&batch),
            Err(SimulationError::NonFiniteResult { paths: 1 })
        );
    }

    #[test]
    fn test_known_values() {
        // Final P&L %: -20, -10, 0, 10, 20 ; drawdowns: 20, 10, 0, 0, 0
        let batch = batch_from_finals(&[80.0, 90.0, 100.0, 110.0, 120.0]);
        let stats = summarize(&batch).unwrap();

        assert_eq!(stats.paths, 5);
        assert!(stats.pnl.mean.abs() < 1e-9);
        assert!(stats.pnl.median.abs() < 1e-9);
        // Population std of {-20,-10,0,10,20} = sqrt(200)
        assert!((stats.pnl.std_dev - 200f64.sqrt()).abs() < 1e-9);
        // Zero is not a profit.
        assert!((stats.pnl.prob_profit_pct - 40.0).abs() < 1e-9);

        assert!((stats.drawdown.mean - 6.0).abs() < 1e-9);
        assert_eq!(stats.drawdown.median, 0.0);
        // floor(5 * 0.95) = 4 => largest drawdown
        assert!((stats.drawdown.p95 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_is_upper_middle_for_even_count() {
        let batch = batch_from_finals(&[101.0, 104.0, 102.0, 103.0]);
        let stats = summarize(&batch).unwrap();
        // Sorted P&L: 1, 2, 3, 4 ; index floor(4 * 0.5) = 2
        assert!((stats.pnl.median - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_path_batch() {
        let batch = batch_from_finals(&[90.0]);
        let stats = summarize(&batch).unwrap();
        assert!((stats.pnl.mean + 10.0).abs() < 1e-9);
        assert_eq!(stats.pnl.std_dev, 0.0);
        assert_eq!(stats.pnl.prob_profit_pct, 0.0);
        assert!((stats.drawdown.p95 - 10.0).abs() < 1e-9);
    }
}
