use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Patterns flagged by the pre-parse scrub check. The export should never
/// carry embedded credentials; seeing one usually means the wrong file was
/// exported alongside device configuration.
const SENSITIVE_PATTERNS: [&str; 2] = [
    r#"api_key\s*=\s*["'].+["']"#,
    r#"password\s*=\s*["'].+["']"#,
];

/// Read a whole input file into memory. Discovery exports are small (one
/// device's scan), so no streaming is needed.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Read the whole of stdin, for `-` inputs.
pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

/// Scan raw input text for credential-looking content before parsing.
pub fn contains_sensitive_data(contents: &str) -> bool {
    SENSITIVE_PATTERNS
        .iter()
        .any(|p| Regex::new(p).map(|re| re.is_match(contents)).unwrap_or(false))
}
