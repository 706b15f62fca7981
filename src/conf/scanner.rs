//! Line scanner for the configuration grammar.
//!
//! Produces normalized lines on demand: comment lines are dropped, every
//! other line is lowercased and stripped of all whitespace. The scanner is
//! the single place where raw text meets the extractors, so both the EID
//! and the DNS-override scans see identical input.

use std::io::BufRead;

/// Iterator over normalized configuration lines.
///
/// # Normalization
///
/// - A line whose first non-space character is `#` is skipped entirely.
/// - Every other line is case-folded to lowercase and has ALL whitespace
///   removed, so `Override-DNS = On` is yielded as `override-dns=on`.
///
/// # I/O errors
///
/// A read error mid-scan ends the iteration early. Extraction is
/// best-effort across this whole module: consumers simply see a shorter
/// sequence and return whatever they collected up to that point.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
}

impl<R: BufRead> LineScanner<R> {
    /// Wraps a buffered reader positioned at the start of the source.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

/// Returns true if the raw line is a comment (first non-space char is `#`).
fn is_comment(raw: &str) -> bool {
    raw.trim_start().starts_with('#')
}

/// Lowercases the line and removes all whitespace, including the newline.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let mut raw = String::new();
            match self.reader.read_line(&mut raw) {
                Ok(0) => return None,
                Ok(_) => {
                    if is_comment(&raw) {
                        continue;
                    }
                    return Some(normalize(&raw));
                }
                Err(e) => {
                    tracing::warn!("Config read failed mid-scan, truncating: {e}");
                    return None;
                }
            }
        }
    }
}
