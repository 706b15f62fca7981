//! EID prefix extraction from `database-mapping` blocks.

use crate::addr::is_valid_address;

/// Scan state for the block-aware pass.
///
/// An explicit two-state machine: an unterminated block at EOF simply
/// falls out of the `for` loop, so the scan can never read past end of
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Scanning top-level lines, looking for a block opener.
    Outer,
    /// Inside a `database-mapping` block, collecting `eid-prefix` entries.
    InBlock,
}

/// Collects validated EID addresses from a sequence of normalized lines.
///
/// A line containing `database-mapping` opens a block; inside it, every
/// line containing `eid-prefix` is parsed and validated. A line containing
/// `}` closes the block, but is still examined for an entry first, so
/// `eid-prefix=10.0.0.1/24}` yields its address. Multiple blocks
/// concatenate in file order. Malformed entries are dropped silently.
pub(super) fn collect_eids<I>(lines: I) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut eids = Vec::new();
    let mut state = ScanState::Outer;

    for line in lines {
        match state {
            ScanState::Outer => {
                if line.contains("database-mapping") {
                    state = ScanState::InBlock;
                }
            }
            ScanState::InBlock => {
                if line.contains("eid-prefix") {
                    if let Some(addr) = parse_eid_prefix(&line) {
                        eids.push(addr);
                    }
                }
                if line.contains('}') {
                    state = ScanState::Outer;
                }
            }
        }
    }

    eids
}

/// Parses `eid-prefix=<address>/<length>` from a normalized line.
///
/// Splits on `=` (needs a value part), then on `/` (needs a prefix length),
/// and keeps the address only if the grammar check accepts it. Any failure
/// returns `None`; the caller skips the line and continues the block scan.
fn parse_eid_prefix(line: &str) -> Option<String> {
    let (_, value) = line.split_once('=')?;
    let (address, _length) = value.split_once('/')?;
    if is_valid_address(address) {
        Some(address.to_string())
    } else {
        None
    }
}
