//! Monte Carlo runner producing a batch of independent equity paths.

use crate::outcome::BernoulliOutcomes;
use crate::path::PathGenerator;
use crate::summary::summarize;
use rayon::prelude::*;
use rmc_domain::SimulationError;
use rmc_domain::entities::PathResult;
use rmc_domain::enums::RngStrategy;
use rmc_domain::value_objects::{
    SimulationBatch, SimulationConfig, SimulationParams, SummaryStatistics,
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs many paths for one validated configuration.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    pub config: SimulationConfig,
    pub strategy: RngStrategy,
}

impl MonteCarloRunner {
    /// Creates a runner using the sequential shared-stream strategy.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            strategy: RngStrategy::SequentialShared,
        }
    }

    /// Validates raw parameters and creates a runner.
    pub fn from_params(params: SimulationParams) -> Result<Self, SimulationError> {
        let config = SimulationConfig::try_from(params)?;
        Ok(Self::new(config))
    }

    /// Sets the random stream strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: RngStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generates `num_simulations` paths.
    ///
    /// Without a configured seed a fresh one is drawn and recorded on the
    /// returned batch so the run can be replayed.
    pub fn run(&self) -> SimulationBatch {
        let seed = self.config.seed().unwrap_or_else(|| {
            let seed = rand::random::<u64>();
            info!(seed, "No seed configured, drew a fresh one");
            seed
        });

        info!(
            paths = self.config.num_simulations(),
            trades = self.config.trades_per_path(),
            strategy = %self.strategy,
            seed,
            "Starting Monte Carlo run"
        );
        let started = Instant::now();

        let paths = match self.strategy {
            RngStrategy::SequentialShared => self.run_sequential(seed),
            RngStrategy::BatchedIndependent => self.run_batched(seed),
        };

        let batch = SimulationBatch::new(paths, self.strategy, seed);
        let ruined = batch.ruined_count();
        if ruined > 0 {
            warn!(ruined, "Some paths reached zero or negative equity");
        }
        let non_finite = batch.non_finite_count();
        if non_finite > 0 {
            warn!(non_finite, "Some paths overflowed to non-finite equity");
        }
        info!(
            paths = batch.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Monte Carlo run complete"
        );
        batch
    }

    /// Generates the batch and summarizes it.
    pub fn run_summarized(&self) -> Result<(SimulationBatch, SummaryStatistics), SimulationError> {
        let batch = self.run();
        let stats = summarize(&batch)?;
        Ok((batch, stats))
    }

    // One stream, consumed path after path on the calling thread.
    fn run_sequential(&self, seed: u64) -> Vec<PathResult> {
        let total = self.config.num_simulations();
        let progress_every = (total / 10).max(1);
        let generator = PathGenerator::new(&self.config);
        let mut source = BernoulliOutcomes::seeded(seed);

        let mut paths = Vec::with_capacity(total);
        for i in 0..total {
            paths.push(generator.generate(&mut source));
            if (i + 1) % progress_every == 0 {
                debug!(done = i + 1, total, "Generated paths");
            }
        }
        paths
    }

    // Path `i` owns stream `i`, so paths can be generated in any order.
    fn run_batched(&self, seed: u64) -> Vec<PathResult> {
        let generator = PathGenerator::new(&self.config);
        (0..self.config.num_simulations())
            .into_par_iter()
            .map(|i| {
                let mut source = BernoulliOutcomes::substream(seed, i as u64);
                generator.generate(&mut source)
            })
            .collect()
    }
}

/// Validates parameters and runs one batch with the given strategy.
pub fn simulate(
    params: SimulationParams,
    strategy: RngStrategy,
) -> Result<SimulationBatch, SimulationError> {
    let runner = MonteCarloRunner::from_params(params)?.with_strategy(strategy);
    Ok(runner.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmc_domain::ConfigError;

    fn small_params() -> SimulationParams {
        SimulationParams::default()
            .with_starting_capital(50_000.0)
            .with_trades_per_path(40)
            .with_num_simulations(64)
            .with_seed(Some(11))
    }

    #[test]
    fn test_batch_size_and_curve_length() {
        for strategy in [RngStrategy::SequentialShared, RngStrategy::BatchedIndependent] {
            let batch = simulate(small_params(), strategy).unwrap();
            assert_eq!(batch.len(), 64);
            assert_eq!(batch.strategy(), strategy);
            assert_eq!(batch.seed(), 11);
            for path in batch.paths() {
                assert_eq!(path.equity_curve().len(), 41);
                assert_eq!(path.equity_curve()[0], 50_000.0);
            }
        }
    }

    #[test]
    fn test_sequential_is_deterministic() {
        let a = simulate(small_params(), RngStrategy::SequentialShared).unwrap();
        let b = simulate(small_params(), RngStrategy::SequentialShared).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_batched_is_deterministic() {
        let a = simulate(small_params(), RngStrategy::BatchedIndependent).unwrap();
        let b = simulate(small_params(), RngStrategy::BatchedIndependent).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strategies_differ_per_path() {
        let seq = simulate(small_params(), RngStrategy::SequentialShared).unwrap();
        let bat = simulate(small_params(), RngStrategy::BatchedIndependent).unwrap();
        assert_ne!(seq.final_pcts(), bat.final_pcts());
    }

    #[test]
    fn test_sequential_paths_depend_on_stream_position() {
        // A shorter run is a prefix of a longer one with the same trade count.
        let short = simulate(small_params(), RngStrategy::SequentialShared).unwrap();
        let long = simulate(
            small_params().with_num_simulations(100),
            RngStrategy::SequentialShared,
        )
        .unwrap();
        assert_eq!(short.paths(), &long.paths()[..64]);

        // Changing the trade count shifts where every later path starts reading.
        let shifted = simulate(
            small_params().with_trades_per_path(41),
            RngStrategy::SequentialShared,
        )
        .unwrap();
        let prefix_matches = short
            .paths()
            .iter()
            .zip(shifted.paths())
            .skip(1)
            .filter(|(a, b)| a.equity_curve() == &b.equity_curve()[..41])
            .count();
        assert!(prefix_matches < 63);
    }

    #[test]
    fn test_batched_paths_own_their_stream() {
        let base = simulate(small_params(), RngStrategy::BatchedIndependent).unwrap();
        let longer = simulate(
            small_params().with_trades_per_path(41),
            RngStrategy::BatchedIndependent,
        )
        .unwrap();
        for (a, b) in base.paths().iter().zip(longer.paths()) {
            assert_eq!(a.equity_curve(), &b.equity_curve()[..41]);
        }
    }

    #[test]
    fn test_unseeded_run_records_its_seed() {
        let runner = MonteCarloRunner::from_params(small_params().with_seed(None)).unwrap();
        let batch = runner.run();

        let replay =
            simulate(small_params().with_seed(Some(batch.seed())), RngStrategy::SequentialShared)
                .unwrap();
        assert_eq!(batch.paths(), replay.paths());
    }

    #[test]
    fn test_invalid_params_fail_before_running() {
        let err = simulate(small_params().with_num_simulations(0), RngStrategy::default())
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::Configuration(ConfigError::NoSimulations)
        );

        let err = MonteCarloRunner::from_params(small_params().with_hit_rate(1.5)).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Configuration(ConfigError::InvalidHitRate(_))
        ));
    }

    #[test]
    fn test_overflowing_equity_is_reported_not_summarized() {
        let params = small_params()
            .with_r_multiple(1e300)
            .with_hit_rate(0.5)
            .with_trades_per_path(20)
            .with_num_simulations(200);
        let runner = MonteCarloRunner::from_params(params).unwrap();

        let batch = runner.run();
        assert!(batch.non_finite_count() > 0);
        assert!(matches!(
            runner.run_summarized(),
            Err(SimulationError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_tiny_risk_keeps_drawdown_near_zero() {
        let params = small_params().with_risk_fraction(0.0001);
        let batch = simulate(params, RngStrategy::SequentialShared).unwrap();
        // 40 straight losses at 0.01% each is under 0.4%.
        assert!(batch.max_drawdowns().iter().all(|&dd| dd < 0.5));
    }
}
