use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Per-site accumulator. One entry per (satellite, sample) covering event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageRecord {
    pub pass_count: u32,
    /// In accumulation order, not sorted.
    pub visit_timestamps: Vec<DateTime<Utc>>,
}

impl CoverageRecord {
    pub(crate) fn record_visit(&mut self, timestamp: DateTime<Utc>) {
        self.pass_count += 1;
        self.visit_timestamps.push(timestamp);
    }

    pub fn is_visited(&self) -> bool {
        !self.visit_timestamps.is_empty()
    }

    pub fn sorted_visits(&self) -> Vec<DateTime<Utc>> {
        let mut visits = self.visit_timestamps.clone();
        visits.sort();
        visits
    }
}

/// Coverage records keyed by site name, in site-table order.
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    entries: Vec<(String, CoverageRecord)>,
    index: HashMap<String, usize>,
}

impl Coverage {
    /// Position of `name`, adding an empty record the first time it is seen.
    /// Repeated names share one record.
    pub(crate) fn insert_site(&mut self, name: &str) -> usize {
        if let Some(&position) = self.index.get(name) {
            return position;
        }
        let position = self.entries.len();
        self.index.insert(name.to_string(), position);
        self.entries
            .push((name.to_string(), CoverageRecord::default()));
        position
    }

    pub(crate) fn record_mut(&mut self, position: usize) -> &mut CoverageRecord {
        &mut self.entries[position].1
    }

    pub fn get(&self, name: &str) -> Option<&CoverageRecord> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoverageRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Site name to pass count, in site-table order.
    pub fn pass_counts(&self) -> Vec<(&str, u32)> {
        self.iter()
            .map(|(name, record)| (name, record.pass_count))
            .collect()
    }

    pub fn unvisited(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, record)| !record.is_visited())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn with_sites(names: &[&str]) -> Coverage {
        let mut coverage = Coverage::default();
        for name in names {
            coverage.insert_site(name);
        }
        coverage
    }

    #[test]
    fn visits_accumulate_unsorted() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut record = CoverageRecord::default();
        record.record_visit(t0 + Duration::seconds(1200));
        record.record_visit(t0);
        record.record_visit(t0);

        assert_eq!(record.pass_count, 3);
        assert_eq!(record.visit_timestamps[0], t0 + Duration::seconds(1200));
        assert_eq!(record.sorted_visits(), vec![t0, t0, t0 + Duration::seconds(1200)]);
    }

    #[test]
    fn preserves_site_order() {
        let mut coverage = with_sites(&["c", "a", "b"]);
        coverage
            .record_mut(1)
            .record_visit(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(coverage.pass_counts(), vec![("c", 0), ("a", 1), ("b", 0)]);
        assert_eq!(coverage.unvisited(), vec!["c", "b"]);
        assert_eq!(coverage.get("a").unwrap().pass_count, 1);
        assert!(coverage.get("z").is_none());
    }

    #[test]
    fn repeated_names_share_a_record() {
        let mut coverage = with_sites(&["a", "b", "a"]);
        assert_eq!(coverage.len(), 2);
        assert_eq!(coverage.insert_site("b"), 1);
        assert_eq!(coverage.pass_counts(), vec![("a", 0), ("b", 0)]);
    }
}
