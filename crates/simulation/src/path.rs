//! Single equity path generation under fixed-fraction risk.

use crate::outcome::OutcomeSource;
use rmc_domain::entities::PathResult;
use rmc_domain::value_objects::SimulationConfig;

/// Applies one trade to the current equity.
///
/// The amount at risk is `equity * risk_fraction`; a win adds `risk * R`,
/// a loss subtracts `risk`. Equity is not clamped, so a ruined path keeps
/// compounding from zero or a negative value.
#[inline]
#[must_use]
pub fn apply_trade(equity: f64, risk_fraction: f64, r_multiple: f64, win: bool) -> f64 {
    let risk_amount = equity * risk_fraction;
    if win {
        equity + risk_amount * r_multiple
    } else {
        equity - risk_amount
    }
}

/// Generates equity paths for a configuration.
#[derive(Debug, Clone, Copy)]
pub struct PathGenerator<'a> {
    config: &'a SimulationConfig,
}

impl<'a> PathGenerator<'a> {
    /// Creates a generator bound to a configuration.
    #[must_use]
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulates one path, consuming exactly `trades_per_path` outcomes.
    pub fn generate<S: OutcomeSource + ?Sized>(&self, source: &mut S) -> PathResult {
        let config = self.config;
        let trades = config.trades_per_path();

        let mut equity = config.starting_capital();
        let mut curve = Vec::with_capacity(trades + 1);
        curve.push(equity);

        for _ in 0..trades {
            let win = source.next_is_win(config.hit_rate());
            equity = apply_trade(equity, config.risk_fraction(), config.r_multiple(), win);
            curve.push(equity);
        }

        PathResult::from_curve(curve, config.starting_capital())
    }
}
