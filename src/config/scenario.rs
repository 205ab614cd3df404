use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, SimulationConfig};
use crate::mission::MissionType;
use crate::sites::{GroundSite, SiteTable};

/// A scenario file: orbit parameters plus the ground sites to evaluate.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub mission: MissionType,
    /// Defaults to the mission's nominal altitude.
    pub altitude_km: Option<f64>,
    #[serde(default = "default_inclination")]
    pub inclination_deg: f64,
    #[serde(default = "default_satellites")]
    pub num_satellites: u32,
    /// Human readable, e.g. "24h" or "90m".
    #[serde(default = "default_duration")]
    pub duration: String,
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sites: Vec<GroundSite>,
    pub sites_file: Option<PathBuf>,
    #[serde(default)]
    pub branches: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

fn default_inclination() -> f64 {
    90.0
}

fn default_satellites() -> u32 {
    3
}

fn default_duration() -> String {
    "24h".to_string()
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut scenario = Self::from_str(&content)?;
        scenario.base_dir = path.parent().map(Path::to_path_buf);
        Ok(scenario)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn altitude_km(&self) -> f64 {
        self.altitude_km
            .unwrap_or_else(|| self.mission.default_altitude_km())
    }

    pub fn duration_hours(&self) -> Result<f64, ConfigError> {
        let duration = humantime::parse_duration(self.duration.trim())
            .map_err(|e| ConfigError::Duration(self.duration.clone(), e.to_string()))?;
        Ok(duration.as_secs_f64() / 3600.0)
    }

    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let altitude_km = self.altitude_km();
        if !self.mission.altitude_in_range(altitude_km) {
            let (min, max) = self.mission.altitude_range_km();
            log::warn!(
                "Altitude {} km is outside the {} band ({}-{} km)",
                altitude_km,
                self.mission,
                min,
                max
            );
        }

        let config = SimulationConfig::new(
            self.mission,
            altitude_km,
            self.inclination_deg,
            self.num_satellites,
            self.duration_hours()?,
        );
        config.validate()?;
        Ok(config)
    }

    /// Inline sites followed by the rows of `sites_file`, then branch/region filters.
    pub fn site_table(&self) -> Result<SiteTable, ConfigError> {
        let mut table = SiteTable::new(self.sites.clone())?;

        if let Some(sites_file) = &self.sites_file {
            let path = match &self.base_dir {
                Some(dir) if sites_file.is_relative() => dir.join(sites_file),
                _ => sites_file.clone(),
            };
            log::debug!("Loading ground sites from {}", path.display());
            table.extend(SiteTable::from_file(&path)?)?;
        }

        Ok(table.filter(&self.branches, &self.regions))
    }
}
