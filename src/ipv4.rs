//! Strict dotted-quad IPv4 validation.
//!
//! Accepts exactly four dot-separated decimal octets in [0, 255]. Leading
//! zeros are rejected (`"192.168.01.1"` is invalid, `"0.0.0.0"` is valid), as
//! is any whitespace, sign, or other non-digit character. Discovery exports
//! carry addresses as opaque strings, so validation stays at the syntax level
//! and never produces a parsed address value.

pub fn is_strict_ipv4(value: &str) -> bool {
    let mut segments = 0;
    for segment in value.split('.') {
        segments += 1;
        if segments > 4 || !is_valid_octet(segment) {
            return false;
        }
    }
    segments == 4
}

fn is_valid_octet(segment: &str) -> bool {
    if segment.is_empty() || segment.len() > 3 {
        return false;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // "0" is fine; "01" and "00" are ambiguous octal-style spellings
    if segment.len() > 1 && segment.starts_with('0') {
        return false;
    }
    segment.parse::<u16>().is_ok_and(|octet| octet <= 255)
}
