use chrono::{DateTime, Utc};

use crate::coverage::CoverageRecord;

/// Largest interval without a visit for one site, counting the stretch from `start`
/// to the first visit and from the last visit to `end`. `None` if never visited.
pub fn longest_gap_seconds(
    record: &CoverageRecord,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<f64> {
    let visits = record.sorted_visits();
    let first = *visits.first()?;
    let last = *visits.last()?;

    let leading = seconds_between(start, first);
    let trailing = seconds_between(last, end);
    let largest = visits
        .windows(2)
        .map(|pair| seconds_between(pair[0], pair[1]))
        .fold(leading.max(trailing), f64::max);
    Some(largest)
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn record(offsets: &[i64]) -> CoverageRecord {
        CoverageRecord {
            pass_count: offsets.len() as u32,
            visit_timestamps: offsets
                .iter()
                .map(|&s| start() + Duration::seconds(s))
                .collect(),
        }
    }

    #[test]
    fn unvisited_site_has_no_gap() {
        let end = start() + Duration::hours(1);
        assert_eq!(longest_gap_seconds(&record(&[]), start(), end), None);
    }

    #[test]
    fn trailing_gap_dominates() {
        let end = start() + Duration::hours(1);
        assert_eq!(longest_gap_seconds(&record(&[0]), start(), end), Some(3600.0));
    }

    #[test]
    fn leading_gap_dominates() {
        let end = start() + Duration::hours(1);
        assert_eq!(longest_gap_seconds(&record(&[3000, 3600]), start(), end), Some(3000.0));
    }

    #[test]
    fn interior_gap_uses_sorted_visits() {
        let end = start() + Duration::hours(2);
        // unsorted and double counted
        let r = record(&[6600, 600, 600, 1200]);
        assert_eq!(longest_gap_seconds(&r, start(), end), Some(5400.0));
    }

    #[test]
    fn gap_is_never_negative() {
        let end = start() + Duration::seconds(1200);
        let r = record(&[0, 0, 600, 1200]);
        assert!(longest_gap_seconds(&r, start(), end).unwrap() >= 0.0);
    }
}
