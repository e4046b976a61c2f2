//! # Summarize Module
//!
//! Generates a human-readable report of a decoded [`RdsData`] record: the
//! station identity fields, which fields have ever been populated, received
//! group-type counts, and any bound Open Data Applications. Intended for a
//! log exerciser's final report, not for decode logic itself.

use rds_model::{GroupVersion, RdsData, ValidValues};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A borrowed view over an [`RdsData`] record that renders as a report.
pub struct Summary<'a> {
    rds: &'a RdsData,
}

/// Wraps a decoded record for display. Cheap: borrows rather than copies.
pub fn summarize(rds: &RdsData) -> Summary<'_> {
    Summary { rds }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let rds = self.rds;

        writeln!(f, "PI: {:04X}", rds.pi_code)?;
        if rds.valid.is_set(ValidValues::PS) {
            writeln!(f, "PS: {:?}", rds.ps.as_str())?;
        }
        if rds.valid.is_set(ValidValues::PTY) {
            writeln!(f, "PTY: {} (TP {})", rds.pty, rds.tp)?;
        }
        if rds.valid.is_set(ValidValues::RT) {
            writeln!(f, "RT: {:?}", rds.rt.as_str())?;
        }
        if rds.valid.is_set(ValidValues::CLOCK) {
            writeln!(
                f,
                "Clock: MJD {} {:02}:{:02} offset {:+}h",
                rds.clock.modified_julian_day(),
                rds.clock.hour,
                rds.clock.minute,
                f64::from(rds.clock.utc_offset_half_hours) / 2.0
            )?;
        }
        if rds.valid.is_set(ValidValues::AF) {
            writeln!(f, "AF: {} table(s)", rds.af.tables.len())?;
        }

        writeln!(f, "Groups decoded: {}", rds.stats.groups_decoded)?;
        writeln!(f, "Block B errors: {}", rds.stats.blockb_errors)?;
        for (code, counts) in rds.stats.groups.iter().enumerate() {
            let [a, b] = *counts;
            if a == 0 && b == 0 {
                continue;
            }
            writeln!(f, "  Group {}A: {}  {}B: {}", code, a, code, b)?;
        }

        if !rds.oda.entries.is_empty() {
            writeln!(f, "ODA bindings:")?;
            for entry in &rds.oda.entries {
                let version = match entry.group_type.version {
                    GroupVersion::A => 'A',
                    GroupVersion::B => 'B',
                };
                writeln!(
                    f,
                    "  AID {:04X} -> {}{} ({} packets)",
                    entry.id, entry.group_type.code, version, entry.packet_count
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rds_model::{GroupType, OdaEntry};

    #[test]
    fn only_reports_fields_that_have_validated() {
        let rds = RdsData::default();
        let text = summarize(&rds).to_string();
        assert!(text.contains("PI: 0000"));
        assert!(!text.contains("PS:"));
        assert!(!text.contains("RT:"));
    }

    #[test]
    fn reports_ps_once_valid_and_oda_bindings() {
        let mut rds = RdsData::default();
        rds.valid.set(ValidValues::PS);
        rds.ps.display = *b"KROCK   ";
        rds.oda.entries.push(OdaEntry {
            id: 0xCD46,
            group_type: GroupType::new(5, GroupVersion::B),
            packet_count: 3,
        });

        let text = summarize(&rds).to_string();
        assert!(text.contains("PS:"));
        assert!(text.contains("KROCK"));
        assert!(text.contains("AID CD46 -> 5B (3 packets)"));
    }
}
