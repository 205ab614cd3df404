mod summary;
mod types;

pub use types::{MetricsReport, PassCountRow, Report, TrackReport};
