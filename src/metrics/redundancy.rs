use std::collections::HashSet;

use crate::propagator::SatelliteTrack;

/// Number of tracks divided by the number of distinct ground positions they visit,
/// positions rounded to 0.01 deg. Zero when there are no positions.
pub fn redundancy_index(tracks: &[SatelliteTrack]) -> f64 {
    let positions: HashSet<(i64, i64)> = tracks
        .iter()
        .flat_map(|track| track.iter())
        .map(|p| (hundredths(p.longitude_deg), hundredths(p.latitude_deg)))
        .collect();

    if positions.is_empty() {
        return 0.0;
    }
    tracks.len() as f64 / positions.len() as f64
}

fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
