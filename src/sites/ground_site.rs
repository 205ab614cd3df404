use serde::{Deserialize, Serialize};

/// A fixed ground location. Branch and region are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundSite {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl GroundSite {
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            branch: None,
            region: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Parse a "lat, lon" pair.
    pub fn from_coordinates(name: impl Into<String>, coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        Some(Self::new(name, lat, lon))
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && self.latitude_deg.abs() <= 90.0
            && self.longitude_deg.abs() <= 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pair() {
        let site = GroundSite::from_coordinates("Vandenberg", "34.74, -120.57").unwrap();
        assert_eq!(site.latitude_deg, 34.74);
        assert_eq!(site.longitude_deg, -120.57);
        assert!(site.branch.is_none());
    }

    #[test]
    fn rejects_malformed_pair() {
        assert!(GroundSite::from_coordinates("x", "34.74").is_none());
        assert!(GroundSite::from_coordinates("x", "north, west").is_none());
        assert!(GroundSite::from_coordinates("x", "1, 2, 3").is_none());
    }

    #[test]
    fn coordinate_validity() {
        assert!(GroundSite::new("a", 90.0, 359.0).has_valid_coordinates());
        assert!(!GroundSite::new("b", 91.0, 0.0).has_valid_coordinates());
        assert!(!GroundSite::new("c", f64::NAN, 0.0).has_valid_coordinates());
        assert!(!GroundSite::new("d", 0.0, f64::INFINITY).has_valid_coordinates());
    }

    #[test]
    fn deserializes_optional_metadata() {
        let yaml = "name: Thule\nlatitude_deg: 76.53\nlongitude_deg: -68.7\nbranch: Space Force\n";
        let site: GroundSite = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(site.branch.as_deref(), Some("Space Force"));
        assert!(site.region.is_none());
    }
}
