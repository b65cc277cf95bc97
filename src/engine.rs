//! Engine: orchestrates loading a discovery document and extracting the
//! normalized host report. Structural failures abort before any record is
//! produced; per-entry problems (non-object entries, invalid IPv4 values)
//! are absorbed into the report counts instead.
//!
//! Typical usage:
//!
//! ```no_run
//! use discover_report::engine::Engine;
//! # fn main() -> anyhow::Result<()> {
//! let engine = Engine::new();
//! let report = engine.parse_file("discovery.json")?;
//! println!("{}", discover_report::report::render_summary(&report));
//! # Ok(())
//! # }
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;

use crate::document::{self, DiscoveryDocument, DocumentError};
use crate::host::{FieldKeys, HostRecord};

/// Aggregate result of one extraction run. Records keep the input order of
/// `host_list`; `valid_ipv4_count` always equals the number of records with
/// `valid == true`, and `total_entries == records.len() + skipped_count`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ParseReport {
    pub records: Vec<HostRecord>,
    pub valid_ipv4_count: usize,
    pub skipped_count: usize,
    pub total_entries: usize,
}

/// Holds the vendor field-key configuration and exposes the loaders.
#[derive(Debug, Default)]
pub struct Engine {
    keys: FieldKeys,
}

impl Engine {
    /// Engine with the stock NetAlly key spellings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with overridden key spellings, for format variants.
    pub fn with_keys(keys: FieldKeys) -> Self {
        Self { keys }
    }

    /// Walk `host_list` and build the report. Fails only on missing or
    /// mistyped `Detail`/`host_list` structure.
    pub fn extract(&self, doc: &DiscoveryDocument) -> Result<ParseReport, DocumentError> {
        let host_list = doc.host_list()?;
        let mut report = ParseReport {
            total_entries: host_list.len(),
            ..ParseReport::default()
        };
        for (index, entry) in host_list.iter().enumerate() {
            let Some(map) = entry.as_object() else {
                warn!("skipping non-object host entry at index {index}");
                report.skipped_count += 1;
                continue;
            };
            let record = HostRecord::from_entry(map, &self.keys);
            if record.valid {
                report.valid_ipv4_count += 1;
            }
            debug!(
                "processed host {}: host_id={:?}, ipv4={:?}, valid={}",
                index + 1,
                record.host_id,
                record.ipv4_address,
                record.valid
            );
            report.records.push(record);
        }
        Ok(report)
    }

    /// Parse raw text already in memory.
    pub fn parse_str(&self, input: &str) -> Result<ParseReport, DocumentError> {
        let doc = document::load(input)?;
        self.extract(&doc)
    }

    /// Read and parse a file on disk.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParseReport> {
        let contents = crate::io::read_input(path.as_ref())?;
        self.parse_str(&contents)
            .with_context(|| format!("parse {}", path.as_ref().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_records_in_order_and_counts_valid() {
        let input = r#"{"Detail":{"host_list":[
            {"host_id":"h1","ipv4_address":"10.0.0.1"},
            {"host_id":"h2","ipv4_address":"bad"}
        ]}}"#;
        let report = Engine::new().parse_str(input).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.total_entries, 2);
        assert_eq!(report.valid_ipv4_count, 1);
        assert_eq!(report.skipped_count, 0);
        assert_eq!(report.records[0].host_id.as_deref(), Some("h1"));
        assert!(report.records[0].valid);
        assert_eq!(report.records[1].host_id.as_deref(), Some("h2"));
        assert!(!report.records[1].valid);
    }

    #[test]
    fn non_object_entries_are_skipped_not_fatal() {
        let input = r#"{"Detail":{"host_list":[
            "bogus",
            {"host_id":"h1","ipv4_address":"192.168.1.5"},
            7
        ]}}"#;
        let report = Engine::new().parse_str(input).unwrap();
        assert_eq!(report.total_entries, 3);
        assert_eq!(report.skipped_count, 2);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.valid_ipv4_count, 1);
    }

    #[test]
    fn valid_count_matches_valid_flags() {
        let input = r#"{"Detail":{"host_list":[
            {"ipv4_address":"10.0.0.1"},
            {"ipv4_address":"192.168.01.1"},
            {"ipv4_address":"172.16.254.3"},
            {"mac_address":"aa:bb:cc:dd:ee:ff"}
        ]}}"#;
        let report = Engine::new().parse_str(input).unwrap();
        let flagged = report.records.iter().filter(|r| r.valid).count();
        assert_eq!(report.valid_ipv4_count, flagged);
        assert_eq!(report.valid_ipv4_count, 2);
    }

    #[test]
    fn empty_host_list_yields_empty_report() {
        let report = Engine::new()
            .parse_str(r#"{"Detail":{"host_list":[]}}"#)
            .unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.total_entries, 0);
        assert_eq!(report.valid_ipv4_count, 0);
    }

    #[test]
    fn structural_errors_propagate() {
        let err = Engine::new().parse_str(r#"{"Detail":{}}"#).unwrap_err();
        assert!(err.to_string().contains("Detail.host_list"));
        assert!(Engine::new().parse_str("not json").is_err());
    }
}
