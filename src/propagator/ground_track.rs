use chrono::{DateTime, Duration, Utc};

use crate::config::SimulationConfig;
use crate::propagator::{SatelliteTrack, TrackPoint};

/// Every satellite completes one revolution in 90 minutes, whatever the altitude.
pub const ORBITAL_PERIOD_SECONDS: f64 = 5400.0;
/// The ascending node regresses one full turn per day.
pub const NODAL_PERIOD_SECONDS: f64 = 86400.0;

/// Ground tracks for every satellite of the constellation, starting at `start`.
///
/// Satellites share a single orbital plane and are spaced evenly in phase.
/// Each track holds `config.sample_count()` points.
pub fn propagate(config: &SimulationConfig, start: DateTime<Utc>) -> Vec<SatelliteTrack> {
    let samples = config.sample_count();
    let step = i64::from(config.sample_interval_seconds);
    let altitude_m = config.altitude_km * 1000.0;

    let tracks: Vec<SatelliteTrack> = (0..config.num_satellites)
        .map(|satellite| {
            let phase_offset_deg = phase_offset_deg(satellite, config.num_satellites);
            let points = (0..samples as i64)
                .map(|i| {
                    let elapsed = i * step;
                    let (longitude_deg, latitude_deg) = sub_satellite_point(
                        config.inclination_deg,
                        phase_offset_deg,
                        elapsed as f64,
                    );
                    TrackPoint {
                        timestamp: start + Duration::seconds(elapsed),
                        longitude_deg,
                        latitude_deg,
                        altitude_m,
                    }
                })
                .collect();
            SatelliteTrack { satellite, points }
        })
        .collect();

    log::debug!(
        "Propagated {} satellites x {} samples ({} s step)",
        tracks.len(),
        samples,
        step
    );
    tracks
}

fn phase_offset_deg(satellite: u32, num_satellites: u32) -> f64 {
    (360.0 / f64::from(num_satellites)) * f64::from(satellite)
}

/// Longitude in [0, 360) and latitude of the sub-satellite point after `elapsed_s` seconds.
pub fn sub_satellite_point(
    inclination_deg: f64,
    phase_offset_deg: f64,
    elapsed_s: f64,
) -> (f64, f64) {
    let mean_anomaly_deg = (360.0 * elapsed_s / ORBITAL_PERIOD_SECONDS).rem_euclid(360.0);
    let nodal_drift_deg = (360.0 * elapsed_s / NODAL_PERIOD_SECONDS).rem_euclid(360.0);
    let argument_deg = mean_anomaly_deg + phase_offset_deg;

    // |sin(i) * sin(theta)| <= 1, so asin stays in its domain.
    let theta = argument_deg.to_radians();
    let latitude_deg = (inclination_deg.to_radians().sin() * theta.sin())
        .asin()
        .to_degrees();
    let longitude_deg = (argument_deg - nodal_drift_deg).rem_euclid(360.0);
    (longitude_deg, latitude_deg)
}
