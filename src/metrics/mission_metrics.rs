use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::coverage::Coverage;
use crate::geodesy::round2;
use crate::metrics::{longest_gap_seconds, redundancy_index};
use crate::mission::RedundancyAssessment;
use crate::propagator::SatelliteTrack;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionMetrics {
    pub redundancy_index: f64,
    /// Worst gap over visited sites. Sites never visited do not contribute.
    pub longest_gap_seconds: f64,
    /// Same as `longest_gap_seconds`, but a never-visited site counts as one gap
    /// spanning the whole run.
    pub longest_gap_with_unvisited_seconds: f64,
    pub unvisited_sites: Vec<String>,
}

impl MissionMetrics {
    pub fn longest_gap_minutes(&self) -> f64 {
        self.longest_gap_seconds / 60.0
    }

    pub fn assessment(&self) -> RedundancyAssessment {
        RedundancyAssessment::from_index(self.redundancy_index)
    }

    pub fn redundancy_display(&self) -> String {
        format!("{:.2}", self.redundancy_index)
    }

    pub fn longest_gap_display(&self) -> String {
        format!("{:.1} min", self.longest_gap_minutes())
    }
}

/// Derive the mission metrics for a run spanning `start..end`.
pub fn compute(
    tracks: &[SatelliteTrack],
    coverage: &Coverage,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> MissionMetrics {
    let full_run_seconds = (end - start).num_milliseconds().max(0) as f64 / 1000.0;

    let mut longest = 0.0_f64;
    let mut longest_with_unvisited = 0.0_f64;
    let mut unvisited_sites = Vec::new();

    for (name, record) in coverage.iter() {
        match longest_gap_seconds(record, start, end) {
            Some(gap) => {
                longest = longest.max(gap);
                longest_with_unvisited = longest_with_unvisited.max(gap);
            }
            None => {
                longest_with_unvisited = longest_with_unvisited.max(full_run_seconds);
                unvisited_sites.push(name.to_string());
            }
        }
    }

    if !unvisited_sites.is_empty() {
        log::warn!(
            "{} of {} sites were never covered",
            unvisited_sites.len(),
            coverage.len()
        );
    }

    let metrics = MissionMetrics {
        redundancy_index: redundancy_index(tracks),
        longest_gap_seconds: longest,
        longest_gap_with_unvisited_seconds: longest_with_unvisited,
        unvisited_sites,
    };
    log::debug!(
        "Redundancy index {} ({}), longest gap {:.1} s",
        round2(metrics.redundancy_index),
        metrics.assessment(),
        metrics.longest_gap_seconds
    );
    metrics
}
