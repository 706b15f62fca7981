//! Secondary interface source: the traffic accounting pseudo-file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{EnumerateError, InterfaceSource};

/// Default accounting pseudo-file path.
///
/// Each line starts with an interface name followed by a space and
/// per-interface traffic counters. Not present on every kernel, which is
/// fine: an unreadable file contributes nothing.
pub const ACCOUNTING_PATH: &str = "/proc/net/xt_qtaguid/iface_stat_all";

/// Secondary interface source reading a line-oriented accounting file.
///
/// Only the name (substring before the first space) is taken from each
/// line, in file order. Lines without a space are skipped.
#[derive(Debug, Clone)]
pub struct AccountingSource {
    path: PathBuf,
}

impl AccountingSource {
    /// Creates a source reading from the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for AccountingSource {
    /// Source at the platform's fixed accounting path.
    fn default() -> Self {
        Self::new(ACCOUNTING_PATH)
    }
}

impl InterfaceSource for AccountingSource {
    fn list(&self) -> Result<Vec<String>, EnumerateError> {
        let file = File::open(&self.path)?;
        let mut names = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some((name, _stats)) = line.split_once(' ') {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }
}
