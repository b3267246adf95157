//! Re-running one configuration across several risk fractions.

use crate::monte_carlo::MonteCarloRunner;
use rmc_domain::SimulationError;
use rmc_domain::enums::RngStrategy;
use rmc_domain::value_objects::{SimulationConfig, SimulationParams, SummaryStatistics};
use serde::Serialize;
use tracing::info;

/// Outcome of one risk fraction in a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    /// Fraction of equity risked per trade.
    pub risk_fraction: f64,
    /// Statistics of the run at this risk fraction.
    pub stats: SummaryStatistics,
}

/// Runs `base` once per risk fraction and summarizes each run.
///
/// Every run uses the same seed, so with the sequential strategy each row
/// sees the identical win/loss sequences and only the sizing differs. All
/// fractions are validated before anything is simulated.
pub fn sweep_risk_fractions(
    base: &SimulationParams,
    risk_fractions: &[f64],
    strategy: RngStrategy,
) -> Result<Vec<SweepRow>, SimulationError> {
    let seed = base.seed.unwrap_or_else(rand::random::<u64>);
    let configs = risk_fractions
        .iter()
        .map(|&risk| {
            SimulationConfig::try_from(
                base.clone()
                    .with_risk_fraction(risk)
                    .with_seed(Some(seed)),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(runs = configs.len(), seed, "Starting risk sweep");

    configs
        .into_iter()
        .map(|config| {
            let risk_fraction = config.risk_fraction();
            let runner = MonteCarloRunner::new(config).with_strategy(strategy);
            let (_, stats) = runner.run_summarized()?;
            Ok(SweepRow {
                risk_fraction,
                stats,
            })
        })
        .collect()
}
