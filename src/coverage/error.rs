use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("malformed coordinates for site {name}: lat={latitude_deg}, lon={longitude_deg}")]
    MalformedSite {
        name: String,
        latitude_deg: f64,
        longitude_deg: f64,
    },
    #[error("invalid footprint radius: {0} km")]
    InvalidRadius(f64),
}
