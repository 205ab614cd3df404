use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::geodesy::round2;
use crate::mission::RedundancyAssessment;
use crate::propagator::TrackPoint;
use crate::simulation::SimulationOutcome;
use crate::sites::{GroundSite, SiteTable};

/// Output handed to the visualization layer.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mission: String,
    pub config: SimulationConfig,
    pub footprint_radius_km: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub tracks: Vec<TrackReport>,
    pub sites: Vec<GroundSite>,
    pub pass_counts: Vec<PassCountRow>,
    pub metrics: MetricsReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackReport {
    pub satellite: String,
    pub points: Vec<TrackPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassCountRow {
    pub base: String,
    pub pass_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub redundancy_index: f64,
    pub redundancy_display: String,
    pub assessment: RedundancyAssessment,
    pub advice: String,
    pub longest_gap_seconds: f64,
    pub longest_gap_minutes: f64,
    pub longest_gap_display: String,
    pub longest_gap_with_unvisited_minutes: f64,
    pub unvisited_sites: Vec<String>,
}

impl Report {
    pub fn new(outcome: &SimulationOutcome, sites: &SiteTable) -> Self {
        let metrics = &outcome.metrics;
        let assessment = metrics.assessment();

        Report {
            mission: outcome.mission.to_string(),
            config: outcome.config,
            footprint_radius_km: round2(outcome.config.footprint_radius_km()),
            start: outcome.start,
            end: outcome.end,
            tracks: outcome
                .tracks
                .iter()
                .map(|track| TrackReport {
                    satellite: track.label(),
                    points: track.points.clone(),
                })
                .collect(),
            sites: sites.sites().to_vec(),
            pass_counts: outcome
                .coverage
                .pass_counts()
                .into_iter()
                .map(|(base, pass_count)| PassCountRow {
                    base: base.to_string(),
                    pass_count,
                })
                .collect(),
            metrics: MetricsReport {
                redundancy_index: metrics.redundancy_index,
                redundancy_display: metrics.redundancy_display(),
                assessment,
                advice: assessment.advice().to_string(),
                longest_gap_seconds: metrics.longest_gap_seconds,
                longest_gap_minutes: metrics.longest_gap_minutes(),
                longest_gap_display: metrics.longest_gap_display(),
                longest_gap_with_unvisited_minutes: metrics.longest_gap_with_unvisited_seconds
                    / 60.0,
                unvisited_sites: metrics.unvisited_sites.clone(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
