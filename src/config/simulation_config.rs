use serde::Serialize;

use crate::config::ConfigError;
use crate::geodesy::footprint_radius_km;
use crate::mission::MissionType;

pub const SAMPLE_INTERVAL_SECONDS: u32 = 600;
pub const MAX_DURATION_HOURS: f64 = 24.0;

/// Immutable parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub num_satellites: u32,
    pub duration_hours: f64,
    pub footprint_half_angle_deg: f64,
    pub sample_interval_seconds: u32,
}

impl SimulationConfig {
    pub fn new(
        mission: MissionType,
        altitude_km: f64,
        inclination_deg: f64,
        num_satellites: u32,
        duration_hours: f64,
    ) -> Self {
        Self {
            altitude_km,
            inclination_deg,
            num_satellites,
            duration_hours,
            footprint_half_angle_deg: mission.footprint_half_angle_deg(),
            sample_interval_seconds: SAMPLE_INTERVAL_SECONDS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.altitude_km.is_finite() && self.altitude_km > 0.0) {
            return Err(ConfigError::invalid(
                "altitude_km",
                format!("{} must be positive", self.altitude_km),
            ));
        }
        if !(0.0..=180.0).contains(&self.inclination_deg) {
            return Err(ConfigError::invalid(
                "inclination_deg",
                format!("{} outside 0..=180", self.inclination_deg),
            ));
        }
        if self.num_satellites == 0 {
            return Err(ConfigError::invalid("num_satellites", "at least one satellite required"));
        }
        if !(self.duration_hours > 0.0 && self.duration_hours <= MAX_DURATION_HOURS) {
            return Err(ConfigError::invalid(
                "duration_hours",
                format!("{} outside (0, {}]", self.duration_hours, MAX_DURATION_HOURS),
            ));
        }
        if !(self.footprint_half_angle_deg > 0.0 && self.footprint_half_angle_deg < 90.0) {
            return Err(ConfigError::invalid(
                "footprint_half_angle_deg",
                format!("{} outside (0, 90)", self.footprint_half_angle_deg),
            ));
        }
        if self.sample_interval_seconds == 0 {
            return Err(ConfigError::invalid("sample_interval_seconds", "must be non-zero"));
        }
        Ok(())
    }

    /// Run length rounded to the nearest whole second.
    pub fn duration_seconds(&self) -> i64 {
        (self.duration_hours * 3600.0).round() as i64
    }

    /// Samples per track. Zero when the run is shorter than one sample interval.
    pub fn sample_count(&self) -> usize {
        let duration = self.duration_seconds();
        let interval = i64::from(self.sample_interval_seconds);
        if interval == 0 || duration < interval {
            return 0;
        }
        ((duration + interval - 1) / interval) as usize
    }

    pub fn footprint_radius_km(&self) -> f64 {
        footprint_radius_km(self.altitude_km, self.footprint_half_angle_deg)
    }
}
