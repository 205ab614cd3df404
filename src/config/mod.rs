mod error;
mod scenario;
mod simulation_config;

pub use error::ConfigError;
pub use scenario::Scenario;
pub use simulation_config::{SimulationConfig, MAX_DURATION_HOURS, SAMPLE_INTERVAL_SECONDS};
