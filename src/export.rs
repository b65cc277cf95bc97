//! Export helpers for writing results to CSV.
//!
//! `save_hosts_csv` writes one row per host record with all seven vendor
//! fields plus the derived `valid` flag; absent fields become empty cells.
use std::path::Path;

use anyhow::Result;
use csv::Writer;

use crate::engine::ParseReport;

pub fn save_hosts_csv<P: AsRef<Path>>(report: &ParseReport, path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record([
        "Host ID",
        "MAC Address",
        "IPv4 Address",
        "IPv4 Subnet",
        "IPv6 Address",
        "MDNS Name",
        "User Name",
        "Valid",
    ])?;
    for r in &report.records {
        wtr.write_record([
            r.host_id.as_deref().unwrap_or(""),
            r.mac_address.as_deref().unwrap_or(""),
            r.ipv4_address.as_deref().unwrap_or(""),
            r.ipv4_subnet.as_deref().unwrap_or(""),
            r.ipv6_address.as_deref().unwrap_or(""),
            r.mdns_name.as_deref().unwrap_or(""),
            r.user_name.as_deref().unwrap_or(""),
            if r.valid { "true" } else { "false" },
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
