mod gap;
mod mission_metrics;
mod redundancy;

pub use gap::longest_gap_seconds;
pub use mission_metrics::{compute, MissionMetrics};
pub use redundancy::redundancy_index;
