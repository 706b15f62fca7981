//! Tests for the interface list merge.

use super::{EnumerateError, InterfaceEnumerator, InterfaceSource};

/// Fake source returning fixed names, or failing when given `None`.
struct FakeSource {
    names: Option<Vec<String>>,
}

impl FakeSource {
    fn returning(names: &[&str]) -> Self {
        Self {
            names: Some(names.iter().map(ToString::to_string).collect()),
        }
    }

    const fn failing() -> Self {
        Self { names: None }
    }
}

impl InterfaceSource for FakeSource {
    fn list(&self) -> Result<Vec<String>, EnumerateError> {
        self.names.clone().ok_or(EnumerateError::Query {
            message: "fake failure".to_string(),
        })
    }
}

#[test]
fn secondary_backfills_names_missing_from_primary() {
    let enumerator = InterfaceEnumerator::new(
        FakeSource::returning(&["eth0", "wlan0"]),
        FakeSource::returning(&["eth0", "rmnet0"]),
    );

    assert_eq!(enumerator.list_interfaces(), vec!["eth0", "wlan0", "rmnet0"]);
}

#[test]
fn primary_order_is_preserved() {
    let enumerator = InterfaceEnumerator::new(
        FakeSource::returning(&["wlan0", "eth0", "lo"]),
        FakeSource::returning(&[]),
    );

    assert_eq!(enumerator.list_interfaces(), vec!["wlan0", "eth0", "lo"]);
}

#[test]
fn primary_failure_degrades_to_secondary_only() {
    let enumerator = InterfaceEnumerator::new(
        FakeSource::failing(),
        FakeSource::returning(&["rmnet0", "rmnet1"]),
    );

    assert_eq!(enumerator.list_interfaces(), vec!["rmnet0", "rmnet1"]);
}

#[test]
fn secondary_failure_degrades_to_primary_only() {
    let enumerator = InterfaceEnumerator::new(
        FakeSource::returning(&["eth0"]),
        FakeSource::failing(),
    );

    assert_eq!(enumerator.list_interfaces(), vec!["eth0"]);
}

#[test]
fn both_sources_failing_yields_an_empty_list() {
    let enumerator = InterfaceEnumerator::new(FakeSource::failing(), FakeSource::failing());

    assert!(enumerator.list_interfaces().is_empty());
}

#[test]
fn fully_overlapping_secondary_adds_nothing() {
    let enumerator = InterfaceEnumerator::new(
        FakeSource::returning(&["eth0", "wlan0"]),
        FakeSource::returning(&["wlan0", "eth0"]),
    );

    assert_eq!(enumerator.list_interfaces(), vec!["eth0", "wlan0"]);
}
