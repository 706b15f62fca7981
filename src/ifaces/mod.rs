//! Host network interface enumeration.
//!
//! This module provides:
//! - The interface name source trait ([`InterfaceSource`])
//! - The OS-backed primary source ([`OsSource`])
//! - The accounting-file secondary source ([`AccountingSource`])
//! - The merging enumerator ([`InterfaceEnumerator`])
//!
//! Two sources are combined because neither is complete on its own: the OS
//! table may omit down interfaces, and the accounting file is not present
//! on every kernel. The merge keeps first-seen order and unique names.

mod accounting;
mod enumerator;
mod platform;
mod source;

#[cfg(test)]
mod enumerator_tests;

pub use accounting::{ACCOUNTING_PATH, AccountingSource};
pub use enumerator::InterfaceEnumerator;
pub use platform::OsSource;
pub use source::{EnumerateError, InterfaceSource};
