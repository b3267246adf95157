//! Human-readable run summary.

use rmc_domain::value_objects::{SimulationConfig, SummaryStatistics};
use std::fmt;

/// Text report of one run: parameters, then P&L and drawdown statistics.
#[derive(Debug, Clone, Copy)]
pub struct SummaryReport<'a> {
    pub config: &'a SimulationConfig,
    pub stats: &'a SummaryStatistics,
}

impl<'a> SummaryReport<'a> {
    #[must_use]
    pub fn new(config: &'a SimulationConfig, stats: &'a SummaryStatistics) -> Self {
        Self { config, stats }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let stats = self.stats;

        writeln!(f, "=== Monte Carlo summary ===")?;
        writeln!(f, "Simulations (paths): {}", stats.paths)?;
        writeln!(
            f,
            "Starting capital (₹): {}",
            group_thousands(config.starting_capital())
        )?;
        writeln!(f, "Trades per path: {}", config.trades_per_path())?;
        writeln!(
            f,
            "R-multiple: {}, hit rate: {:.2}, risk/trade: {:.2}%",
            format_decimal(config.r_multiple()),
            config.hit_rate(),
            config.risk_fraction() * 100.0
        )?;
        writeln!(f)?;
        writeln!(f, "PNL %:")?;
        writeln!(f, "  mean: {:.2}", stats.pnl.mean)?;
        writeln!(f, "  median: {:.2}", stats.pnl.median)?;
        writeln!(f, "  std dev: {:.2}", stats.pnl.std_dev)?;
        writeln!(f, "  Prob(PNL % > 0): {:.2}%", stats.pnl.prob_profit_pct)?;
        writeln!(f)?;
        writeln!(f, "Max drawdown %:")?;
        writeln!(f, "  mean: {:.2}", stats.drawdown.mean)?;
        writeln!(f, "  median: {:.2}", stats.drawdown.median)?;
        writeln!(f, "  95th percentile: {:.2}", stats.drawdown.p95)
    }
}

/// Shortest round-trip form of a value, keeping a decimal point on whole
/// numbers (`2.0`, not `2`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Formats a value rounded to whole units with `,` between thousands.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}
