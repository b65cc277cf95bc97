//! Host record data model and the raw-entry-to-record conversion.
//!
//! A NetAlly discovery export describes each host as a loose JSON object; the
//! key spellings belong to the vendor format and are collected in
//! [`FieldKeys`] so the rest of the crate never hand-spells them. All fields
//! are optional pass-throughs except the IPv4 address, which is run through
//! strict dotted-quad validation to derive the `valid` flag.
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::ipv4::is_strict_ipv4;

/// Vendor key spellings for one host entry. Held immutably by the engine;
/// override only when testing against a format variant.
#[derive(Debug, Clone)]
pub struct FieldKeys {
    pub host_id: &'static str,
    pub mac_address: &'static str,
    pub ipv4_address: &'static str,
    pub ipv4_subnet: &'static str,
    pub ipv6_address: &'static str,
    pub mdns_name: &'static str,
    pub user_name: &'static str,
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            host_id: "host_id",
            mac_address: "mac_address",
            ipv4_address: "ipv4_address",
            ipv4_subnet: "ipv4_subnet",
            ipv6_address: "ipv6_address",
            mdns_name: "mdns_name",
            user_name: "user_name",
        }
    }
}

/// Normalized representation of one discovered host.
///
/// Only `ipv4_address` is validated; every other field is carried through
/// unchanged. A missing key and a non-string value both yield `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    pub host_id: Option<String>,
    pub mac_address: Option<String>,
    pub ipv4_address: Option<String>,
    pub ipv4_subnet: Option<String>,
    pub ipv6_address: Option<String>,
    pub mdns_name: Option<String>,
    pub user_name: Option<String>,
    /// True iff `ipv4_address` passed strict dotted-quad validation.
    pub valid: bool,
}

fn string_field(entry: &Map<String, Value>, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

impl HostRecord {
    /// Convert a raw host entry into a normalized record. Invalid IPv4 values
    /// are kept on the record (they are a data-quality signal, not an error)
    /// with `valid` cleared, and logged at warn.
    pub fn from_entry(entry: &Map<String, Value>, keys: &FieldKeys) -> Self {
        let ipv4_address = string_field(entry, keys.ipv4_address);
        let valid = match ipv4_address.as_deref() {
            Some(addr) => {
                let ok = is_strict_ipv4(addr);
                if !ok {
                    warn!("invalid IPv4 address: {addr}");
                }
                ok
            }
            None => false,
        };
        Self {
            host_id: string_field(entry, keys.host_id),
            mac_address: string_field(entry, keys.mac_address),
            ipv4_address,
            ipv4_subnet: string_field(entry, keys.ipv4_subnet),
            ipv6_address: string_field(entry, keys.ipv6_address),
            mdns_name: string_field(entry, keys.mdns_name),
            user_name: string_field(entry, keys.user_name),
            valid,
        }
    }
}
