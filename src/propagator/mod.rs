mod ground_track;
mod types;

pub use ground_track::{
    propagate, sub_satellite_point, NODAL_PERIOD_SECONDS, ORBITAL_PERIOD_SECONDS,
};
pub use types::{SatelliteTrack, TrackPoint};
