//! Merging enumerator over the two interface sources.

use super::{AccountingSource, InterfaceSource, OsSource};

/// Merges interface names from a primary and a secondary source.
///
/// The OS table is authoritative for order; the accounting file backfills
/// interfaces the OS query missed (typically ones that are down). Failure
/// of either source degrades to an empty contribution from that side.
///
/// # Type Parameters
///
/// - `P`: primary source (OS interface table in production)
/// - `S`: secondary source (accounting file in production)
#[derive(Debug)]
pub struct InterfaceEnumerator<P, S> {
    primary: P,
    secondary: S,
}

impl InterfaceEnumerator<OsSource, AccountingSource> {
    /// Enumerator over the host's real sources.
    #[must_use]
    pub fn host() -> Self {
        Self::new(OsSource::new(), AccountingSource::default())
    }
}

impl<P: InterfaceSource, S: InterfaceSource> InterfaceEnumerator<P, S> {
    /// Creates an enumerator over the given sources.
    #[must_use]
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Returns the merged interface list.
    ///
    /// Primary names come first, in source order, then secondary names not
    /// already present, in their own order. Primary names are assumed
    /// unique amongst themselves; only secondary names are checked for
    /// duplicates. Never fails.
    #[must_use]
    pub fn list_interfaces(&self) -> Vec<String> {
        let mut names = self.primary.list().unwrap_or_else(|e| {
            tracing::warn!("Primary interface query failed: {e}");
            Vec::new()
        });

        let secondary = self.secondary.list().unwrap_or_else(|e| {
            tracing::warn!("Secondary interface source unavailable: {e}");
            Vec::new()
        });

        for name in secondary {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        names
    }
}
