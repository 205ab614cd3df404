use chrono::{DateTime, Duration, Utc};

use crate::config::{Scenario, SimulationConfig};
use crate::coverage::{analyze, Coverage};
use crate::metrics::{compute, MissionMetrics};
use crate::mission::MissionType;
use crate::propagator::{propagate, SatelliteTrack};
use crate::simulation::SimulationError;
use crate::sites::SiteTable;

/// One simulation run: a configuration, the sites to evaluate and a start instant.
pub struct Simulation {
    pub mission: MissionType,
    pub config: SimulationConfig,
    pub sites: SiteTable,
    pub start: DateTime<Utc>,
}

/// Everything a run produces. Tracks are read-only once built.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub mission: MissionType,
    pub config: SimulationConfig,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub tracks: Vec<SatelliteTrack>,
    pub coverage: Coverage,
    pub metrics: MissionMetrics,
}

impl Simulation {
    pub fn new(
        mission: MissionType,
        config: SimulationConfig,
        sites: SiteTable,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            mission,
            config,
            sites,
            start,
        }
    }

    /// Build a run from a scenario file, starting now unless the scenario pins a start.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SimulationError> {
        let config = scenario.simulation_config()?;
        let sites = scenario.site_table()?;
        let start = scenario.start.unwrap_or_else(Utc::now);
        Ok(Self::new(scenario.mission, config, sites, start))
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::seconds(self.config.duration_seconds())
    }

    pub fn run(&self) -> Result<SimulationOutcome, SimulationError> {
        self.config.validate()?;

        let end = self.end();
        log::info!(
            "Simulating {} satellites at {} km, {} deg inclination, {} sites, {} -> {}",
            self.config.num_satellites,
            self.config.altitude_km,
            self.config.inclination_deg,
            self.sites.len(),
            self.start.to_rfc3339(),
            end.to_rfc3339()
        );

        let tracks = propagate(&self.config, self.start);
        let coverage = analyze(
            &tracks,
            self.sites.sites(),
            self.config.footprint_radius_km(),
        )?;
        let metrics = compute(&tracks, &coverage, self.start, end);

        log::info!(
            "Redundancy index {}, longest coverage gap {}",
            metrics.redundancy_display(),
            metrics.longest_gap_display()
        );

        Ok(SimulationOutcome {
            mission: self.mission,
            config: self.config,
            start: self.start,
            end,
            tracks,
            coverage,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::sites::GroundSite;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let config = SimulationConfig::new(MissionType::HighResolutionImaging, 500.0, 90.0, 1, 1.0);
        let sites = SiteTable::new(vec![GroundSite::new("Origin", 0.0, 0.0)]).unwrap();
        let outcome = Simulation::new(MissionType::HighResolutionImaging, config, sites, start())
            .run()
            .unwrap();

        assert_eq!(outcome.tracks.len(), 1);
        assert_eq!(outcome.tracks[0].len(), 6);
        assert_eq!(outcome.end, start() + Duration::hours(1));
        assert!(outcome.coverage.get("Origin").unwrap().pass_count >= 1);
    }

    #[test]
    fn empty_site_table_completes() {
        let config = SimulationConfig::new(MissionType::WeatherObservation, 800.0, 98.0, 3, 24.0);
        let outcome = Simulation::new(
            MissionType::WeatherObservation,
            config,
            SiteTable::default(),
            start(),
        )
        .run()
        .unwrap();

        assert!(outcome.coverage.pass_counts().is_empty());
        assert_eq!(outcome.metrics.longest_gap_seconds, 0.0);
        assert_eq!(outcome.tracks.len(), 3);
    }

    #[test]
    fn runs_are_independent_and_deterministic() {
        let config = SimulationConfig::new(MissionType::Communications, 1000.0, 60.0, 4, 12.0);
        let sites = SiteTable::new(vec![
            GroundSite::new("A", 10.0, 10.0),
            GroundSite::new("B", -40.0, 170.0),
        ])
        .unwrap();
        let simulation = Simulation::new(MissionType::Communications, config, sites, start());

        let first = simulation.run().unwrap();
        let second = simulation.run().unwrap();
        assert_eq!(first.tracks, second.tracks);
        assert_eq!(first.coverage.pass_counts(), second.coverage.pass_counts());
        assert_eq!(first.metrics, second.metrics);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimulationConfig::new(MissionType::Communications, 1000.0, 200.0, 1, 1.0);
        let result = Simulation::new(MissionType::Communications, config, SiteTable::default(), start())
            .run();
        assert!(matches!(
            result,
            Err(SimulationError::Config(ConfigError::InvalidParameter { field: "inclination_deg", .. }))
        ));
    }

    #[test]
    fn end_matches_scenario_duration() {
        let scenario =
            Scenario::from_str("duration: 65m\nstart: 2025-01-01T00:00:00Z\n").unwrap();
        let simulation = Simulation::from_scenario(&scenario).unwrap();
        assert_eq!(simulation.end(), start() + Duration::seconds(3900));
    }

    #[test]
    fn from_scenario_honours_start() {
        let scenario = Scenario::from_str(
            "mission: weather_observation\nnum_satellites: 2\nduration: 2h\nstart: 2025-01-01T00:00:00Z\n",
        )
        .unwrap();
        let simulation = Simulation::from_scenario(&scenario).unwrap();
        assert_eq!(simulation.start, start());
        assert_eq!(simulation.config.altitude_km, 800.0);
        assert_eq!(simulation.end(), start() + Duration::hours(2));
    }
}
