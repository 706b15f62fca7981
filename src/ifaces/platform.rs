//! OS-level interface enumeration.

use network_interface::{NetworkInterface, NetworkInterfaceConfig};

use super::{EnumerateError, InterfaceSource};

/// Primary interface source backed by the OS interface table.
///
/// Names are returned in the order the OS reports them. On some systems
/// the table omits interfaces that are administratively down, which is why
/// the enumerator consults a secondary accounting source as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl OsSource {
    /// Creates the OS-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InterfaceSource for OsSource {
    fn list(&self) -> Result<Vec<String>, EnumerateError> {
        let interfaces = NetworkInterface::show().map_err(|e| EnumerateError::Query {
            message: e.to_string(),
        })?;

        Ok(interfaces.into_iter().map(|i| i.name).collect())
    }
}
