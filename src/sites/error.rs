use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("duplicate site name: {0}")]
    DuplicateName(String),
    #[error("invalid coordinates for site {name}: lat={latitude_deg}, lon={longitude_deg}")]
    InvalidCoordinates {
        name: String,
        latitude_deg: f64,
        longitude_deg: f64,
    },
    #[error("site file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("site file parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
