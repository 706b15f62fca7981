//! IP address grammar validation.
//!
//! A pure textual check used by the configuration extractors before an
//! address is accepted. Three grammars are recognized: IPv4 dotted-quad,
//! full-form IPv6, and compressed IPv6 (`::` notation). No canonicalization
//! or network/host-bit validation is performed.

use std::sync::LazyLock;

use regex::Regex;

/// IPv4 dotted-quad: four groups of 1-3 digits, each in 0-255.
/// Leading zeros are textually permitted (`010.0.0.1` is accepted).
/// Digits are spelled `[0-9]` rather than `\d`, which here matches any
/// Unicode decimal digit and would let non-ASCII numerals through.
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])\.){3}([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])$")
        .expect("valid IPv4 grammar")
});

/// IPv6 full form: exactly 8 colon-separated groups of 1-4 hex digits.
static IPV6_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}$").expect("valid IPv6 grammar")
});

/// IPv6 compressed form: two optional runs of colon-separated hex groups
/// joined by `::`. Either side may be empty, covering leading, trailing,
/// and mid compression (`::1`, `2001:db8::`, `2001:db8::1`, `::`).
static IPV6_COMPRESSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^((?:[0-9a-f]{1,4}(?::[0-9a-f]{1,4})*)?)::((?:[0-9a-f]{1,4}(?::[0-9a-f]{1,4})*)?)$")
        .expect("valid compressed IPv6 grammar")
});

/// Returns true if `candidate` matches any of the three address grammars.
///
/// The match is anchored to the full string; surrounding whitespace or any
/// trailing text (such as a `/24` prefix length) causes rejection.
#[must_use]
pub fn is_valid_address(candidate: &str) -> bool {
    IPV4.is_match(candidate) || IPV6_FULL.is_match(candidate) || IPV6_COMPRESSED.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ipv4 {
        use super::*;

        #[test]
        fn accepts_dotted_quads_in_range() {
            assert!(is_valid_address("0.0.0.0"));
            assert!(is_valid_address("10.0.0.1"));
            assert!(is_valid_address("192.168.1.254"));
            assert!(is_valid_address("255.255.255.255"));
        }

        #[test]
        fn accepts_textual_leading_zeros() {
            assert!(is_valid_address("010.001.000.009"));
        }

        #[test]
        fn rejects_groups_above_255() {
            assert!(!is_valid_address("256.0.0.1"));
            assert!(!is_valid_address("10.0.0.999"));
        }

        #[test]
        fn rejects_wrong_group_count() {
            assert!(!is_valid_address("10.0.0"));
            assert!(!is_valid_address("10.0.0.1.2"));
        }

        #[test]
        fn rejects_non_numeric_groups() {
            assert!(!is_valid_address("10.a.0.1"));
            assert!(!is_valid_address("bad-value"));
        }

        #[test]
        fn rejects_non_ascii_digits() {
            // Arabic-Indic and Devanagari numerals are Unicode decimal
            // digits but not part of the dotted-quad grammar.
            assert!(!is_valid_address("٥.٥.٥.٥"));
            assert!(!is_valid_address("१.२.३.४"));
            assert!(!is_valid_address("10.0.0.٥"));
        }

        #[test]
        fn rejects_partial_matches() {
            assert!(!is_valid_address("10.0.0.1/24"));
            assert!(!is_valid_address(" 10.0.0.1"));
            assert!(!is_valid_address("x10.0.0.1"));
        }
    }

    mod ipv6_full {
        use super::*;

        #[test]
        fn accepts_eight_groups() {
            assert!(is_valid_address("2001:0db8:0000:0000:0000:ff00:0042:8329"));
            assert!(is_valid_address("fe80:1:2:3:4:5:6:7"));
        }

        #[test]
        fn hex_digits_are_case_insensitive() {
            assert!(is_valid_address("2001:0DB8:0:0:0:FF00:42:8329"));
        }

        #[test]
        fn rejects_seven_or_nine_groups() {
            assert!(!is_valid_address("1:2:3:4:5:6:7"));
            assert!(!is_valid_address("1:2:3:4:5:6:7:8:9"));
        }

        #[test]
        fn rejects_oversized_groups() {
            assert!(!is_valid_address("12345:2:3:4:5:6:7:8"));
        }
    }

    mod ipv6_compressed {
        use super::*;

        #[test]
        fn accepts_mid_compression() {
            assert!(is_valid_address("2001:db8::1"));
            assert!(is_valid_address("2001:db8::ff00:42:8329"));
        }

        #[test]
        fn accepts_leading_and_trailing_compression() {
            assert!(is_valid_address("::1"));
            assert!(is_valid_address("2001:db8::"));
            assert!(is_valid_address("::"));
        }

        #[test]
        fn rejects_triple_colon() {
            assert!(!is_valid_address(":::1"));
            assert!(!is_valid_address("1:::"));
        }

        #[test]
        fn rejects_missing_double_colon() {
            assert!(!is_valid_address("2001:db8"));
            assert!(!is_valid_address(":"));
        }
    }
}
