pub mod simulation_batch;
pub mod simulation_config;
pub mod summary_statistics;

pub use simulation_batch::SimulationBatch;
pub use simulation_config::{SimulationConfig, SimulationParams};
pub use summary_statistics::{DrawdownStatistics, PnlStatistics, SummaryStatistics};
