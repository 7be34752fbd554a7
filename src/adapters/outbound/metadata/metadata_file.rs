//! Parser for core metadata files (`METADATA`, `PKG-INFO`).
//!
//! These files use RFC 822 style headers: `Name: value` lines, with
//! continuation lines starting with whitespace. Headers stop at the first
//! blank line; the long description follows and is ignored here.

/// Parses the header block into `(name, value)` pairs in file order.
///
/// Continuation lines are appended to the previous value after a newline,
/// with their leading whitespace removed. Lines that are neither headers
/// nor continuations are skipped.
pub fn parse_headers(content: &str) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }

        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = headers.last_mut() {
                value.push('\n');
                value.push_str(line.trim_start());
            }
            continue;
        }

        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    headers
}
