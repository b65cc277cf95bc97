//! Human-readable report rendering for terminal output.
//!
//! Produces a colored summary with the per-host field listing (in input
//! order, `N/A` for absent fields) followed by overall counts and a
//! field-presence breakdown.
use colored::*;

use crate::engine::ParseReport;
use crate::stats::calculate_statistics;

fn visible_len(s: &str) -> usize {
    // Strip ANSI escape sequences (\x1b[ ... m) to compute printable width
    let mut len = 0;
    let mut iter = s.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\u{1b}' {
            if let Some('[') = iter.peek().cloned() {
                let _ = iter.next();
            }
            for c in iter.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn section_header(title: &str) -> String {
    let len = visible_len(title);
    let mut s = String::new();
    s.push('\n');
    s.push_str(title);
    s.push('\n');
    s.push_str(&"─".repeat(len));
    s.push_str("\n\n");
    s
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

pub fn render_summary(report: &ParseReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "NetAlly Discovery Report".bold().cyan()));

    // Per-host listing, input order
    let mut host_lines: Vec<String> = Vec::new();
    if report.records.is_empty() {
        host_lines.push("(No hosts discovered)".to_string());
    }
    for (i, r) in report.records.iter().enumerate() {
        if i > 0 {
            host_lines.push(String::new());
        }
        host_lines.push(format!("Host {}:", i + 1));
        host_lines.push(format!("  Host ID: {}", or_na(&r.host_id)));
        host_lines.push(format!("  MAC Address: {}", or_na(&r.mac_address)));
        host_lines.push(match r.ipv4_address.as_deref() {
            Some(addr) if r.valid => format!("  IPv4 Address: {} {}", addr, "(valid)".green()),
            Some(addr) => format!("  IPv4 Address: {} {}", addr, "(invalid)".red()),
            None => "  IPv4 Address: N/A".to_string(),
        });
        host_lines.push(format!("  IPv4 Subnet: {}", or_na(&r.ipv4_subnet)));
        host_lines.push(format!("  IPv6 Address: {}", or_na(&r.ipv6_address)));
        host_lines.push(format!("  MDNS Name: {}", or_na(&r.mdns_name)));
        host_lines.push(format!("  User Name: {}", or_na(&r.user_name)));
    }
    out.push_str(&section_header(
        &"Discovered Hosts".bold().yellow().to_string(),
    ));
    for line in host_lines {
        out.push_str(&line);
        out.push('\n');
    }

    // Totals and data-quality breakdown
    let stats = calculate_statistics(report);
    let mut summary_lines: Vec<String> = Vec::new();
    summary_lines.push(format!("Total entries: {}", report.total_entries));
    summary_lines.push(format!("Parsed hosts: {}", stats.parsed));
    summary_lines.push(format!("Skipped entries: {}", report.skipped_count));
    summary_lines.push(format!(
        "Valid IPv4 addresses: {} ({})",
        report.valid_ipv4_count, stats.valid_percentage
    ));
    summary_lines.push(format!("Invalid IPv4 addresses: {}", stats.invalid_ipv4));
    summary_lines.push(format!("Missing IPv4 addresses: {}", stats.missing_ipv4));
    summary_lines.push("Field presence:".bold().blue().to_string());
    for (label, count) in stats.presence.rows() {
        summary_lines.push(format!("  {}: {}", label, count));
    }
    out.push_str(&section_header(&"Summary".bold().cyan().to_string()));
    for line in summary_lines {
        out.push_str(&line);
        out.push('\n');
    }

    out
}
