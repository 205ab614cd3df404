use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Sub-satellite point at one sample time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub timestamp: DateTime<Utc>,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub altitude_m: f64,
}

/// Serialized as `{ "time": <RFC 3339>, "pos": [lon, lat, alt_m] }`.
impl Serialize for TrackPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TrackPoint", 2)?;
        state.serialize_field("time", &self.timestamp.to_rfc3339())?;
        state.serialize_field(
            "pos",
            &[self.longitude_deg, self.latitude_deg, self.altitude_m],
        )?;
        state.end()
    }
}

/// Time-ordered ground track of one satellite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteTrack {
    pub satellite: u32,
    pub points: Vec<TrackPoint>,
}

impl SatelliteTrack {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackPoint> {
        self.points.iter()
    }

    /// Display label, 1-based.
    pub fn label(&self) -> String {
        format!("SAT-{}", self.satellite + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn track_point_serializes_as_time_and_position() {
        let point = TrackPoint {
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 0, 10, 0).unwrap(),
            longitude_deg: 40.0,
            latitude_deg: -12.5,
            altitude_m: 500_000.0,
        };
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["time"], "2025-01-01T00:10:00+00:00");
        assert_eq!(json["pos"], serde_json::json!([40.0, -12.5, 500000.0]));
    }

    #[test]
    fn labels_are_one_based() {
        let track = SatelliteTrack {
            satellite: 0,
            points: Vec::new(),
        };
        assert_eq!(track.label(), "SAT-1");
        assert!(track.is_empty());
    }
}
