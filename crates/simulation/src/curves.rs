//! Sampling of equity curves for external renderers.
//!
//! Nothing here draws; it only picks which curves a plotting tool should
//! receive and packages them in a serializable form.

use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;
use rmc_domain::value_objects::SimulationBatch;
use serde::Serialize;

/// Default number of curves handed to a renderer.
pub const DEFAULT_CURVE_SAMPLE: usize = 50;

/// One sampled equity curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSample {
    /// Path index within the batch.
    pub index: usize,
    /// Equity after each trade, starting capital first.
    pub equity: Vec<f64>,
}

/// Picks up to `count` distinct path indices, without replacement.
///
/// The selection generator is seeded with `seed + 1` so it never shares a
/// stream with the simulation itself.
#[must_use]
pub fn sample_curve_indices(num_paths: usize, count: usize, seed: u64) -> Vec<usize> {
    let amount = count.min(num_paths);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    index::sample(&mut rng, num_paths, amount).into_vec()
}

/// Samples up to `count` curves from a batch, reproducibly for its seed.
#[must_use]
pub fn sample_curves(batch: &SimulationBatch, count: usize) -> Vec<CurveSample> {
    let matrix = batch.equity_matrix();
    sample_curve_indices(batch.len(), count, batch.seed())
        .into_iter()
        .map(|index| CurveSample {
            index,
            equity: matrix[index].to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::simulate;
    use rmc_domain::enums::RngStrategy;
    use rmc_domain::value_objects::SimulationParams;
    use std::collections::HashSet;

    #[test]
    fn test_indices_are_distinct_and_in_range() {
        let indices = sample_curve_indices(200, 50, 42);
        assert_eq!(indices.len(), 50);
        assert!(indices.iter().all(|&i| i < 200));
        let unique: HashSet<_> = indices.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_count_is_capped_by_paths() {
        let mut indices = sample_curve_indices(5, 50, 1);
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sampling_is_reproducible() {
        assert_eq!(sample_curve_indices(1000, 20, 9), sample_curve_indices(1000, 20, 9));
    }

    #[test]
    fn test_sampled_curves_match_batch() {
        let params = SimulationParams::default()
            .with_trades_per_path(10)
            .with_num_simulations(30)
            .with_seed(Some(5));
        let batch = simulate(params, RngStrategy::SequentialShared).unwrap();
        let samples = sample_curves(&batch, 8);

        assert_eq!(samples.len(), 8);
        for sample in &samples {
            assert_eq!(sample.equity.len(), 11);
            assert_eq!(sample.equity, batch.paths()[sample.index].equity_curve());
        }

        let json = serde_json::to_string(&samples[0]).unwrap();
        assert!(json.starts_with("{\"index\":"));
    }
}
