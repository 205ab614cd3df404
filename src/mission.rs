use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Mission types and the sensor geometry each one implies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    #[default]
    #[strum(serialize = "High-Resolution Imaging")]
    HighResolutionImaging,
    #[strum(serialize = "Weather Observation")]
    WeatherObservation,
    #[strum(serialize = "Communications")]
    Communications,
}

impl MissionType {
    pub const ALL: [MissionType; 3] = [
        MissionType::HighResolutionImaging,
        MissionType::WeatherObservation,
        MissionType::Communications,
    ];

    pub fn footprint_half_angle_deg(&self) -> f64 {
        match self {
            MissionType::HighResolutionImaging => 5.0,
            MissionType::WeatherObservation => 25.0,
            MissionType::Communications => 45.0,
        }
    }

    /// Recommended altitude band (min, max) in km.
    pub fn altitude_range_km(&self) -> (f64, f64) {
        match self {
            MissionType::HighResolutionImaging => (450.0, 600.0),
            MissionType::WeatherObservation => (600.0, 900.0),
            MissionType::Communications => (700.0, 1200.0),
        }
    }

    pub fn default_altitude_km(&self) -> f64 {
        match self {
            MissionType::HighResolutionImaging => 500.0,
            MissionType::WeatherObservation => 800.0,
            MissionType::Communications => 1000.0,
        }
    }

    pub fn altitude_in_range(&self, altitude_km: f64) -> bool {
        let (min, max) = self.altitude_range_km();
        (min..=max).contains(&altitude_km)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedundancyAssessment {
    #[strum(serialize = "over-redundant")]
    OverRedundant,
    #[strum(serialize = "balanced")]
    Balanced,
    #[strum(serialize = "under-covered")]
    UnderCovered,
}

impl RedundancyAssessment {
    pub const HIGH_THRESHOLD: f64 = 1.5;
    pub const LOW_THRESHOLD: f64 = 1.0;

    pub fn from_index(redundancy_index: f64) -> Self {
        if redundancy_index > Self::HIGH_THRESHOLD {
            RedundancyAssessment::OverRedundant
        } else if redundancy_index < Self::LOW_THRESHOLD {
            RedundancyAssessment::UnderCovered
        } else {
            RedundancyAssessment::Balanced
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RedundancyAssessment::OverRedundant => {
                "High redundancy: consider reducing satellites or lowering altitude."
            }
            RedundancyAssessment::UnderCovered => {
                "Low redundancy: add satellites or increase altitude to fill gaps."
            }
            RedundancyAssessment::Balanced => "Redundancy is balanced.",
        }
    }
}
