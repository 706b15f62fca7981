//! Interface name source trait and error type.

use thiserror::Error;

/// Error type for interface name queries.
///
/// Describes what went wrong without dictating recovery strategy; the
/// enumerator recovers by treating a failed source as empty.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// The OS-level interface query failed.
    #[error("Interface query failed: {message}")]
    Query {
        /// Message describing the platform failure.
        message: String,
    },

    /// The accounting source could not be read.
    #[error("Accounting source read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// Trait for producing an ordered list of interface names.
///
/// # Design
///
/// Both the OS query and the accounting-file reader implement this trait,
/// so the merge logic in [`InterfaceEnumerator`] is platform-independent
/// and testable with in-memory fakes.
///
/// [`InterfaceEnumerator`]: super::InterfaceEnumerator
pub trait InterfaceSource: Send + Sync {
    /// Returns interface names in source order.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError`] when the underlying query or read fails.
    /// Callers treat a failure as an empty contribution.
    fn list(&self) -> Result<Vec<String>, EnumerateError>;
}
