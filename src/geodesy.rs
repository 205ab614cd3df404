/// Mean Earth radius used for all ground distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points given in radians.
pub fn haversine_km(lat1_rad: f64, lon1_rad: f64, lat2_rad: f64, lon2_rad: f64) -> f64 {
    let dphi = lat2_rad - lat1_rad;
    let dlambda = lon2_rad - lon1_rad;
    let a = (dphi / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Ground radius of a sensor cone with the given half-angle, seen from `altitude_km`.
pub fn footprint_radius_km(altitude_km: f64, half_angle_deg: f64) -> f64 {
    (EARTH_RADIUS_KM + altitude_km) * half_angle_deg.to_radians().tan()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
