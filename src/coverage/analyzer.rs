use crate::coverage::{Coverage, CoverageError};
use crate::geodesy::haversine_km;
use crate::propagator::SatelliteTrack;
use crate::sites::GroundSite;

/// Which sites fall inside each satellite's footprint at each sample.
///
/// Every (satellite, sample) pair that covers a site adds one pass and one
/// timestamp to that site, so two satellites over the same site at the same
/// time count twice.
pub fn analyze(
    tracks: &[SatelliteTrack],
    sites: &[GroundSite],
    footprint_radius_km: f64,
) -> Result<Coverage, CoverageError> {
    if !(footprint_radius_km.is_finite() && footprint_radius_km >= 0.0) {
        return Err(CoverageError::InvalidRadius(footprint_radius_km));
    }

    let mut coverage = Coverage::default();
    let site_coords = sites
        .iter()
        .map(|site| {
            if site.latitude_deg.is_finite() && site.longitude_deg.is_finite() {
                Ok((coverage.insert_site(&site.name), site.lat_rad(), site.lon_rad()))
            } else {
                Err(CoverageError::MalformedSite {
                    name: site.name.clone(),
                    latitude_deg: site.latitude_deg,
                    longitude_deg: site.longitude_deg,
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut events = 0usize;

    for track in tracks {
        for point in track.iter() {
            let sat_lat = point.latitude_deg.to_radians();
            let sat_lon = point.longitude_deg.to_radians();

            for &(position, site_lat, site_lon) in &site_coords {
                if haversine_km(sat_lat, sat_lon, site_lat, site_lon) <= footprint_radius_km {
                    coverage.record_mut(position).record_visit(point.timestamp);
                    events += 1;
                }
            }
        }
    }

    log::debug!(
        "Coverage: {} events across {} sites (radius {:.1} km)",
        events,
        sites.len(),
        footprint_radius_km
    );
    Ok(coverage)
}
