//! Configuration file access and extraction.
//!
//! This module provides:
//! - A handle on the configuration file ([`ConfigSource`])
//! - The normalized line scanner ([`LineScanner`])
//! - EID prefix extraction from `database-mapping` blocks
//! - DNS override extraction ([`DnsOverride`])
//!
//! # Grammar
//!
//! The file is line-oriented. A line whose first non-space character is `#`
//! is a comment. Directive lines are `key = value`; internal whitespace is
//! stripped and keys match case-insensitively. A line containing
//! `database-mapping` opens a block of `eid-prefix = <address>/<length>`
//! entries that closes at the first line containing `}`.
//!
//! # Failure policy
//!
//! Only construction can fail (missing file). Extraction is best-effort:
//! malformed lines are skipped, read errors truncate the scan, and the
//! caller receives whatever was collected.

mod dns;
mod eid;
mod error;
mod scanner;
mod source;


pub use dns::DnsOverride;
pub use error::ConfigError;
pub use scanner::LineScanner;
pub use source::ConfigSource;
