//! Simulation parameters and their validated form.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw, unvalidated simulation parameters.
///
/// This is what configuration files and command-line flags deserialize into.
/// Convert it with [`SimulationConfig::try_from`] before simulating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Starting capital of every path.
    pub starting_capital: f64,
    /// Reward per unit of risk on a winning trade.
    pub r_multiple: f64,
    /// Probability that a trade wins, in [0, 1].
    pub hit_rate: f64,
    /// Trades simulated per path.
    pub trades_per_path: usize,
    /// Fraction of current equity risked on each trade, in (0, 1].
    pub risk_fraction: f64,
    /// Number of simulated paths.
    pub num_simulations: usize,
    /// Generator seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            starting_capital: 200_000.0,
            r_multiple: 1.6,
            hit_rate: 0.4,
            trades_per_path: 500,
            risk_fraction: 0.01,
            num_simulations: 5000,
            seed: Some(42),
        }
    }
}

impl SimulationParams {
    /// Sets the starting capital.
    #[must_use]
    pub fn with_starting_capital(mut self, capital: f64) -> Self {
        self.starting_capital = capital;
        self
    }

    /// Sets the R-multiple.
    #[must_use]
    pub fn with_r_multiple(mut self, r_multiple: f64) -> Self {
        self.r_multiple = r_multiple;
        self
    }

    /// Sets the hit rate.
    #[must_use]
    pub fn with_hit_rate(mut self, hit_rate: f64) -> Self {
        self.hit_rate = hit_rate;
        self
    }

    /// Sets the number of trades per path.
    #[must_use]
    pub fn with_trades_per_path(mut self, trades: usize) -> Self {
        self.trades_per_path = trades;
        self
    }

    /// Sets the risk fraction per trade.
    #[must_use]
    pub fn with_risk_fraction(mut self, risk_fraction: f64) -> Self {
        self.risk_fraction = risk_fraction;
        self
    }

    /// Sets the number of simulated paths.
    #[must_use]
    pub fn with_num_simulations(mut self, paths: usize) -> Self {
        self.num_simulations = paths;
        self
    }

    /// Sets or clears the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the parameters, reporting the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_capital.is_finite() || self.starting_capital <= 0.0 {
            return Err(ConfigError::InvalidStartingCapital(self.starting_capital));
        }
        if !self.r_multiple.is_finite() {
            return Err(ConfigError::InvalidRMultiple(self.r_multiple));
        }
        if !self.hit_rate.is_finite() || !(0.0..=1.0).contains(&self.hit_rate) {
            return Err(ConfigError::InvalidHitRate(self.hit_rate));
        }
        if !self.risk_fraction.is_finite() || self.risk_fraction <= 0.0 || self.risk_fraction > 1.0
        {
            return Err(ConfigError::InvalidRiskFraction(self.risk_fraction));
        }
        if self.trades_per_path == 0 {
            return Err(ConfigError::NoTrades);
        }
        if self.num_simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        Ok(())
    }
}

/// Validated, immutable simulation configuration.
///
/// Only obtainable through [`TryFrom<SimulationParams>`], so every instance
/// satisfies the parameter domains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    starting_capital: f64,
    r_multiple: f64,
    hit_rate: f64,
    trades_per_path: usize,
    risk_fraction: f64,
    num_simulations: usize,
    seed: Option<u64>,
}

impl TryFrom<SimulationParams> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(params: SimulationParams) -> Result<Self, Self::Error> {
        params.validate()?;
        if params.r_multiple <= 0.0 {
            warn!(
                r_multiple = params.r_multiple,
                "Non-positive R-multiple: winning trades will not grow equity"
            );
        }
        Ok(Self {
            starting_capital: params.starting_capital,
            r_multiple: params.r_multiple,
            hit_rate: params.hit_rate,
            trades_per_path: params.trades_per_path,
            risk_fraction: params.risk_fraction,
            num_simulations: params.num_simulations,
            seed: params.seed,
        })
    }
}

impl SimulationConfig {
    /// Starting capital of every path.
    #[must_use]
    pub fn starting_capital(&self) -> f64 {
        self.starting_capital
    }

    /// Reward per unit of risk on a winning trade.
    #[must_use]
    pub fn r_multiple(&self) -> f64 {
        self.r_multiple
    }

    /// Probability that a trade wins.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        self.hit_rate
    }

    /// Trades simulated per path.
    #[must_use]
    pub fn trades_per_path(&self) -> usize {
        self.trades_per_path
    }

    /// Fraction of current equity risked on each trade.
    #[must_use]
    pub fn risk_fraction(&self) -> f64 {
        self.risk_fraction
    }

    /// Number of simulated paths.
    #[must_use]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Generator seed, if one was configured.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Expected profit per trade in units of risk: `p * (R + 1) - 1`.
    #[must_use]
    pub fn expected_r_per_trade(&self) -> f64 {
        self.hit_rate * (self.r_multiple + 1.0) - 1.0
    }

    /// Returns the raw parameters this config was built from.
    #[must_use]
    pub fn to_params(&self) -> SimulationParams {
        SimulationParams {
            starting_capital: self.starting_capital,
            r_multiple: self.r_multiple,
            hit_rate: self.hit_rate,
            trades_per_path: self.trades_per_path,
            risk_fraction: self.risk_fraction,
            num_simulations: self.num_simulations,
            seed: self.seed,
        }
    }
}
