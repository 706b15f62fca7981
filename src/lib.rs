//! lispconf: configuration extraction for a LISP mobility client.
//!
//! Reads the client's line-oriented configuration file to extract EID
//! prefixes and the optional DNS override, validates IP address grammar,
//! and enumerates host network interfaces from two merged sources.

pub mod addr;
pub mod conf;
pub mod ifaces;
