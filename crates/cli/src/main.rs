//! Command Line Interface for the R-multiple Monte Carlo simulator.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use prettytable::{Table, row};
use rmc_simulation::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "rmc")]
#[command(about = "Monte Carlo simulator for fixed-fraction R-multiple strategies", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate paths and print the summary
    Run {
        #[command(flatten)]
        params: ParamArgs,

        /// Random stream strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Sequential)]
        strategy: StrategyArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Simulate paths and export a sample of equity curves as JSON
    Curves {
        #[command(flatten)]
        params: ParamArgs,

        /// Random stream strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Sequential)]
        strategy: StrategyArg,

        /// Number of curves to export
        #[arg(short, long, default_value_t = DEFAULT_CURVE_SAMPLE)]
        count: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare several risk fractions on the same outcome sequences
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Random stream strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Sequential)]
        strategy: StrategyArg,

        /// Comma separated risk fractions, e.g. 0.005,0.01,0.02
        #[arg(long, value_delimiter = ',', required = true)]
        risk: Vec<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Simulation parameters. Flags override environment, which overrides the config file.
#[derive(Args, Default)]
struct ParamArgs {
    /// JSON file with simulation parameters
    #[arg(long, env = "RMC_CONFIG")]
    config: Option<PathBuf>,

    /// Starting capital
    #[arg(long, env = "RMC_CAPITAL")]
    capital: Option<f64>,

    /// Reward per unit of risk on a winning trade
    #[arg(long, env = "RMC_R_MULTIPLE")]
    r_multiple: Option<f64>,

    /// Probability of a win (0-1)
    #[arg(long, env = "RMC_HIT_RATE")]
    hit_rate: Option<f64>,

    /// Trades per path
    #[arg(long, env = "RMC_TRADES")]
    trades: Option<usize>,

    /// Fraction of current equity risked per trade (0-1]
    #[arg(long, env = "RMC_RISK_FRACTION")]
    risk_fraction: Option<f64>,

    /// Number of simulated paths
    #[arg(long, env = "RMC_PATHS")]
    paths: Option<usize>,

    /// RNG seed
    #[arg(long, env = "RMC_SEED")]
    seed: Option<u64>,

    /// Ignore any configured seed and draw a fresh one
    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,
}

impl ParamArgs {
    fn resolve(&self) -> Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => load_params(path)?,
            None => SimulationParams::default(),
        };

        if let Some(capital) = self.capital {
            params = params.with_starting_capital(capital);
        }
        if let Some(r_multiple) = self.r_multiple {
            params = params.with_r_multiple(r_multiple);
        }
        if let Some(hit_rate) = self.hit_rate {
            params = params.with_hit_rate(hit_rate);
        }
        if let Some(trades) = self.trades {
            params = params.with_trades_per_path(trades);
        }
        if let Some(risk_fraction) = self.risk_fraction {
            params = params.with_risk_fraction(risk_fraction);
        }
        if let Some(paths) = self.paths {
            params = params.with_num_simulations(paths);
        }
        if self.seed.is_some() {
            params = params.with_seed(self.seed);
        }
        if self.unseeded {
            params = params.with_seed(None);
        }

        debug!(?params, "Resolved simulation parameters");
        Ok(params)
    }
}

fn load_params(path: &Path) -> Result<SimulationParams> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// One shared stream consumed in path order
    Sequential,
    /// Independent per-path streams, generated in parallel
    Batched,
}

impl From<StrategyArg> for RngStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => RngStrategy::SequentialShared,
            StrategyArg::Batched => RngStrategy::BatchedIndependent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    params: SimulationParams,
    strategy: RngStrategy,
    seed: u64,
    expected_r_per_trade: f64,
    stats: &'a SummaryStatistics,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        Commands::Run {
            params,
            strategy,
            format,
        } => {
            let runner = MonteCarloRunner::from_params(params.resolve()?)?
                .with_strategy((*strategy).into());
            let (batch, stats) = runner.run_summarized()?;

            match format {
                OutputFormat::Text => print!("{}", SummaryReport::new(&runner.config, &stats)),
                OutputFormat::Json => {
                    let output = RunOutput {
                        params: runner.config.to_params(),
                        strategy: batch.strategy(),
                        seed: batch.seed(),
                        expected_r_per_trade: runner.config.expected_r_per_trade(),
                        stats: &stats,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
        Commands::Curves {
            params,
            strategy,
            count,
            output,
        } => {
            let batch = simulate(params.resolve()?, (*strategy).into())?;
            let samples = sample_curves(&batch, *count);

            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    serde_json::to_writer_pretty(&mut writer, &samples)?;
                    writer.flush()?;
                    eprintln!("Wrote {} curves to {}", samples.len(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    serde_json::to_writer_pretty(&mut handle, &samples)?;
                    writeln!(handle)?;
                }
            }
        }
        Commands::Sweep {
            params,
            strategy,
            risk,
            format,
        } => {
            let rows = sweep_risk_fractions(&params.resolve()?, risk, (*strategy).into())?;

            match format {
                OutputFormat::Text => print_sweep_table(&rows),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            }
        }
    }

    Ok(())
}

fn print_sweep_table(rows: &[SweepRow]) {
    let mut table = Table::new();
    table.set_titles(row![
        "Risk %",
        "Mean PNL %",
        "Median PNL %",
        "Std PNL %",
        "Prob(PNL > 0) %",
        "Mean DD %",
        "Median DD %",
        "P95 DD %"
    ]);
    for r in rows {
        table.add_row(row![
            format!("{:.2}", r.risk_fraction * 100.0),
            format!("{:.2}", r.stats.pnl.mean),
            format!("{:.2}", r.stats.pnl.median),
            format!("{:.2}", r.stats.pnl.std_dev),
            format!("{:.2}", r.stats.pnl.prob_profit_pct),
            format!("{:.2}", r.stats.drawdown.mean),
            format!("{:.2}", r.stats.drawdown.median),
            format!("{:.2}", r.stats.drawdown.p95)
        ]);
    }
    table.printstd();
}
