mod analyzer;
mod error;
mod record;

pub use analyzer::analyze;
pub use error::CoverageError;
pub use record::{Coverage, CoverageRecord};
