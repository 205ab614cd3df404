use thiserror::Error;

use crate::config::ConfigError;
use crate::coverage::CoverageError;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("coverage error: {0}")]
    Coverage(#[from] CoverageError),
}
