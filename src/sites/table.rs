use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sites::{GroundSite, SiteError};

/// Ordered ground-site table keyed by unique site name.
#[derive(Debug, Clone, Default)]
pub struct SiteTable {
    sites: Vec<GroundSite>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SiteFile {
    List(Vec<GroundSite>),
    Wrapped { sites: Vec<GroundSite> },
}

impl SiteTable {
    pub fn new(sites: Vec<GroundSite>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for site in &sites {
            if !site.has_valid_coordinates() {
                return Err(SiteError::InvalidCoordinates {
                    name: site.name.clone(),
                    latitude_deg: site.latitude_deg,
                    longitude_deg: site.longitude_deg,
                });
            }
            if !seen.insert(site.name.as_str()) {
                return Err(SiteError::DuplicateName(site.name.clone()));
            }
        }
        Ok(Self { sites })
    }

    /// Load a YAML site list, either a bare sequence or a `sites:` mapping.
    pub fn from_file(path: &Path) -> Result<Self, SiteError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SiteError> {
        let sites = match serde_yaml::from_str::<SiteFile>(yaml)? {
            SiteFile::List(sites) => sites,
            SiteFile::Wrapped { sites } => sites,
        };
        Self::new(sites)
    }

    /// Append the rows of `other`, keeping name uniqueness.
    pub fn extend(&mut self, other: SiteTable) -> Result<(), SiteError> {
        for site in other.sites {
            if self.get(&site.name).is_some() {
                return Err(SiteError::DuplicateName(site.name));
            }
            self.sites.push(site);
        }
        Ok(())
    }

    /// Keep rows whose branch is listed in `branches` and whose region is listed in
    /// `regions`. An empty list disables that filter.
    pub fn filter(&self, branches: &[String], regions: &[String]) -> SiteTable {
        let allowed_by = |value: &Option<String>, allowed: &[String]| {
            allowed.is_empty()
                || value
                    .as_ref()
                    .is_some_and(|v| allowed.iter().any(|a| a == v))
        };

        let sites = self
            .sites
            .iter()
            .filter(|s| allowed_by(&s.branch, branches) && allowed_by(&s.region, regions))
            .cloned()
            .collect();
        SiteTable { sites }
    }

    pub fn get(&self, name: &str) -> Option<&GroundSite> {
        self.sites.iter().find(|s| s.name == name)
    }

    pub fn sites(&self) -> &[GroundSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn bases() -> SiteTable {
        SiteTable::new(vec![
            GroundSite::new("Fort Alpha", 35.0, -79.0)
                .with_branch("Army")
                .with_region("East"),
            GroundSite::new("Naval Beta", 32.7, -117.2)
                .with_branch("Navy")
                .with_region("West"),
            GroundSite::new("Gamma AFB", 38.8, -104.7).with_branch("Air Force"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = SiteTable::new(vec![
            GroundSite::new("Dup", 0.0, 0.0),
            GroundSite::new("Dup", 1.0, 1.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SiteError::DuplicateName(name) if name == "Dup"));
    }

    #[test]
    fn rejects_bad_coordinates() {
        let err = SiteTable::new(vec![GroundSite::new("Nowhere", 120.0, 0.0)]).unwrap_err();
        assert!(matches!(err, SiteError::InvalidCoordinates { .. }));
    }

    #[test]
    fn empty_table_is_valid() {
        let table = SiteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn filter_by_branch() {
        let table = bases().filter(&["Navy".to_string()], &[]);
        assert_eq!(table.len(), 1);
        assert!(table.get("Naval Beta").is_some());
    }

    #[test]
    fn filter_by_region_drops_rows_without_region() {
        let table = bases().filter(&[], &["East".to_string(), "West".to_string()]);
        assert_eq!(table.len(), 2);
        assert!(table.get("Gamma AFB").is_none());
    }

    #[test]
    fn empty_filters_keep_everything() {
        assert_eq!(bases().filter(&[], &[]).len(), 3);
    }

    #[test]
    fn extend_keeps_names_unique() {
        let mut table = bases();
        let extra = SiteTable::new(vec![GroundSite::new("Fort Alpha", 0.0, 0.0)]).unwrap();
        assert!(table.extend(extra).is_err());

        let extra = SiteTable::new(vec![GroundSite::new("Delta", 0.0, 0.0)]).unwrap();
        table.extend(extra).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn loads_bare_list_and_wrapped_forms() {
        let bare = "- { name: A, latitude_deg: 1.0, longitude_deg: 2.0 }\n";
        assert_eq!(SiteTable::from_yaml(bare).unwrap().len(), 1);

        let wrapped = "sites:\n  - { name: A, latitude_deg: 1.0, longitude_deg: 2.0, region: North }\n  - { name: B, latitude_deg: 3.0, longitude_deg: 4.0 }\n";
        let table = SiteTable::from_yaml(wrapped).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A").unwrap().region.as_deref(), Some("North"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- {{ name: Site, latitude_deg: -33.9, longitude_deg: 18.4 }}").unwrap();
        let table = SiteTable::from_file(file.path()).unwrap();
        assert_eq!(table.sites()[0].name, "Site");
    }
}
