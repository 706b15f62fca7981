//! DNS override extraction.
//!
//! Three flat directives control DNS replacement: `override-dns` switches
//! the feature, `override-dns-primary` and `override-dns-secondary` supply
//! the replacement servers. The two operations deliberately differ on
//! repeated directives: the full extractor scans to EOF and takes the last
//! occurrence, the narrower enabled-check stops at the first `override-dns`
//! it sees.

use serde::Serialize;

use crate::addr::is_valid_address;

/// An active DNS override with up to two replacement servers.
///
/// Returned only when the `override-dns` directive enabled the feature;
/// "override present but disabled" is not representable. Either server may
/// be absent when its directive was missing or failed the grammar check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsOverride {
    /// Primary replacement server, if supplied and valid.
    pub primary: Option<String>,
    /// Secondary replacement server, if supplied and valid.
    pub secondary: Option<String>,
}

/// Returns the directive value if the normalized line carries `key=`.
///
/// The value is the substring after the first `=`. An empty value is
/// treated the same as a missing one, matching the split-count guard of
/// the line grammar.
fn directive_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    if !line.contains(key) {
        return None;
    }
    match line.split_once('=') {
        Some((_, value)) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Full extraction: scans every line, last match wins per directive.
pub(super) fn extract_override<I>(lines: I) -> Option<DnsOverride>
where
    I: Iterator<Item = String>,
{
    let mut enabled = false;
    let mut primary = None;
    let mut secondary = None;

    for line in lines {
        if let Some(value) = directive_value(&line, "override-dns=") {
            enabled = value == "on" || value == "true";
        } else if let Some(value) = directive_value(&line, "override-dns-primary=") {
            if is_valid_address(value) {
                primary = Some(value.to_string());
            }
        } else if let Some(value) = directive_value(&line, "override-dns-secondary=") {
            if is_valid_address(value) {
                secondary = Some(value.to_string());
            }
        }
    }

    if enabled {
        tracing::info!(
            "DNS override active: primary={:?} secondary={:?}",
            primary,
            secondary
        );
        Some(DnsOverride { primary, secondary })
    } else {
        None
    }
}

/// Narrow check: returns at the FIRST `override-dns` directive found.
///
/// Unlike [`extract_override`], a later directive cannot change the answer.
/// A directive with an empty value does not count as a match and the scan
/// continues.
pub(super) fn override_enabled<I>(lines: I) -> bool
where
    I: Iterator<Item = String>,
{
    for line in lines {
        if let Some(value) = directive_value(&line, "override-dns=") {
            return value == "on" || value == "true";
        }
    }
    false
}
