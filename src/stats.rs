//! Statistical summaries over a parse report.
//!
//! Defines `ReportStats` (counts and a valid percentage) plus a per-field
//! presence breakdown used by the report renderer to show how complete the
//! scan data is.
use crate::engine::ParseReport;
use crate::host::HostRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldPresence {
    pub host_id: usize,
    pub mac_address: usize,
    pub ipv4_address: usize,
    pub ipv4_subnet: usize,
    pub ipv6_address: usize,
    pub mdns_name: usize,
    pub user_name: usize,
}

impl FieldPresence {
    /// (label, count) pairs in the fixed display order of the vendor format.
    pub fn rows(&self) -> [(&'static str, usize); 7] {
        [
            ("host_id", self.host_id),
            ("mac_address", self.mac_address),
            ("ipv4_address", self.ipv4_address),
            ("ipv4_subnet", self.ipv4_subnet),
            ("ipv6_address", self.ipv6_address),
            ("mdns_name", self.mdns_name),
            ("user_name", self.user_name),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub parsed: usize,
    pub valid_ipv4: usize,
    /// Addresses present on a record but failing strict validation.
    pub invalid_ipv4: usize,
    pub missing_ipv4: usize,
    pub valid_percentage: String,
    pub presence: FieldPresence,
}

fn pct(n: usize, d: usize) -> String {
    if d == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n as f64) / (d as f64) * 100.0)
}

fn count_presence(records: &[HostRecord]) -> FieldPresence {
    let mut p = FieldPresence::default();
    for r in records {
        p.host_id += r.host_id.is_some() as usize;
        p.mac_address += r.mac_address.is_some() as usize;
        p.ipv4_address += r.ipv4_address.is_some() as usize;
        p.ipv4_subnet += r.ipv4_subnet.is_some() as usize;
        p.ipv6_address += r.ipv6_address.is_some() as usize;
        p.mdns_name += r.mdns_name.is_some() as usize;
        p.user_name += r.user_name.is_some() as usize;
    }
    p
}

pub fn calculate_statistics(report: &ParseReport) -> ReportStats {
    let parsed = report.records.len();
    let valid = report.valid_ipv4_count;
    let present = report
        .records
        .iter()
        .filter(|r| r.ipv4_address.is_some())
        .count();
    ReportStats {
        parsed,
        valid_ipv4: valid,
        invalid_ipv4: present - valid,
        missing_ipv4: parsed - present,
        valid_percentage: pct(valid, parsed),
        presence: count_presence(&report.records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn splits_valid_invalid_and_missing() {
        let input = r#"{"Detail":{"host_list":[
            {"ipv4_address":"10.0.0.1","mac_address":"aa:bb:cc:dd:ee:ff"},
            {"ipv4_address":"999.0.0.1"},
            {"host_id":"h3"}
        ]}}"#;
        let report = Engine::new().parse_str(input).unwrap();
        let s = calculate_statistics(&report);
        assert_eq!(s.parsed, 3);
        assert_eq!(s.valid_ipv4, 1);
        assert_eq!(s.invalid_ipv4, 1);
        assert_eq!(s.missing_ipv4, 1);
        assert_eq!(s.valid_percentage, "33.33%");
        assert_eq!(s.presence.ipv4_address, 2);
        assert_eq!(s.presence.mac_address, 1);
        assert_eq!(s.presence.host_id, 1);
    }

    #[test]
    fn empty_report_avoids_division_by_zero() {
        let report = Engine::new()
            .parse_str(r#"{"Detail":{"host_list":[]}}"#)
            .unwrap();
        let s = calculate_statistics(&report);
        assert_eq!(s.valid_percentage, "0.00%");
        assert_eq!(s, ReportStats {
            valid_percentage: "0.00%".to_string(),
            ..ReportStats::default()
        });
    }
}
