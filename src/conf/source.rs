//! Configuration source handle.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::dns::{self, DnsOverride};
use super::eid;
use super::error::ConfigError;
use super::scanner::LineScanner;

/// Handle on the client configuration file.
///
/// Existence is checked once at construction; a missing file is the only
/// hard failure in this module. Every extraction call opens its own read
/// handle and scans the file front to back, so results always reflect the
/// on-disk contents at call time and no parser state is shared between
/// calls. The handle is closed when the scanner is dropped, on every exit
/// path.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
}

impl ConfigSource {
    /// Creates a source for the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.exists() {
            Ok(Self { path })
        } else {
            tracing::warn!("Configuration file '{}' does not exist", path.display());
            Err(ConfigError::NotFound { path })
        }
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh scanner over the file.
    ///
    /// Failure to open (the file may have disappeared since construction)
    /// degrades to an empty sequence, consistent with the best-effort
    /// policy for mid-scan read errors.
    fn scan(&self) -> Option<LineScanner<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Some(LineScanner::new(BufReader::new(file))),
            Err(e) => {
                tracing::warn!("Failed to open '{}': {e}", self.path.display());
                None
            }
        }
    }

    /// Extracts all validated EID addresses from `database-mapping` blocks.
    ///
    /// Never fails: malformed entries are skipped, an unterminated block or
    /// a read error terminates the scan with whatever was collected.
    #[must_use]
    pub fn eids(&self) -> Vec<String> {
        self.scan().map(eid::collect_eids).unwrap_or_default()
    }

    /// Extracts the DNS override setting, if enabled.
    ///
    /// Returns `None` both when the directive is absent and when it is
    /// present but disabled. Later directives overwrite earlier ones.
    #[must_use]
    pub fn dns_override(&self) -> Option<DnsOverride> {
        dns::extract_override(self.scan()?)
    }

    /// Returns true if the first `override-dns` directive enables the
    /// override.
    ///
    /// First match wins, unlike [`Self::dns_override`] where the last
    /// occurrence does. Both behaviors are kept deliberately.
    #[must_use]
    pub fn override_enabled(&self) -> bool {
        self.scan().is_some_and(dns::override_enabled)
    }
}
