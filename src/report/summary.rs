use std::fmt::{self, Write};

use crate::report::Report;

impl Report {
    /// Plain-text summary for terminals.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Current Configuration")?;
        writeln!(out, "  Mission:      {}", self.mission)?;
        writeln!(out, "  Altitude:     {} km", self.config.altitude_km)?;
        writeln!(out, "  Inclination:  {}°", self.config.inclination_deg)?;
        writeln!(out, "  Satellites:   {}", self.config.num_satellites)?;
        writeln!(out, "  Footprint:    {:.1} km", self.footprint_radius_km)?;
        writeln!(
            out,
            "  Window:       {} -> {}",
            self.start.to_rfc3339(),
            self.end.to_rfc3339()
        )?;
        writeln!(out)?;

        writeln!(out, "Mission Analytics")?;
        writeln!(out, "  Redundancy Index:      {}", self.metrics.redundancy_display)?;
        writeln!(out, "  Longest Coverage Gap:  {}", self.metrics.longest_gap_display)?;
        writeln!(out, "  {}", self.metrics.advice)?;
        if !self.metrics.unvisited_sites.is_empty() {
            writeln!(
                out,
                "  Never covered: {}",
                self.metrics.unvisited_sites.join(", ")
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Pass Count per Base")?;
        if self.pass_counts.is_empty() {
            writeln!(out, "  (no sites)")?;
        }
        let width = self
            .pass_counts
            .iter()
            .map(|row| row.base.chars().count())
            .max()
            .unwrap_or(0);
        for row in &self.pass_counts {
            writeln!(out, "  {:<width$}  {:>5}", row.base, row.pass_count, width = width)?;
        }
        Ok(())
    }
}
