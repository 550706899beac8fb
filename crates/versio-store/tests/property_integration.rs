//! Integration tests for store-backed version properties
//!
//! Exercises the defaulting and optional accessors end to end against the
//! in-memory store, including the corrupt-value fallback path.

use pretty_assertions::assert_eq;
use versio_core::Version;
use versio_store::{MemoryStore, OptionalVersionProperty, StringStore, VersionProperty};

#[test]
fn test_defaulting_property_lifecycle() {
    let mut store = MemoryStore::new();
    let property = VersionProperty::parse_default("updater", "installed", "1.0").unwrap();

    // Nothing stored yet: the default applies and the store stays empty.
    assert_eq!(property.get(&store), Version::new(1, 0, 0));
    assert!(store.is_empty());

    let installed: Version = "1.4.2+build.88".parse().unwrap();
    property.set(&mut store, &installed);
    assert_eq!(property.get(&store), installed);

    // The store holds the canonical string form.
    assert_eq!(
        store.get("updater.installed"),
        Some("1.4.2+build.88".to_string())
    );
}

#[test]
fn test_corrupt_stored_value_falls_back_to_default() {
    let mut store = MemoryStore::new();
    store.set("updater.installed", "1.2.3.4.5");

    let property = VersionProperty::new("updater", "installed", Version::new(1, 0, 0));
    assert_eq!(property.get(&store), Version::new(1, 0, 0));

    // A subsequent write repairs the entry.
    property.set(&mut store, &Version::new(2, 0, 0));
    assert_eq!(store.get("updater.installed"), Some("2.0.0".to_string()));
    assert_eq!(property.get(&store), Version::new(2, 0, 0));
}

#[test]
fn test_properties_are_isolated_by_key() {
    let mut store = MemoryStore::new();
    let installed = VersionProperty::new("updater", "installed", Version::new(1, 0, 0));
    let available = VersionProperty::new("updater", "available", Version::new(1, 0, 0));

    installed.set(&mut store, &Version::new(1, 5, 0));
    available.set(&mut store, &Version::new(2, 0, 0));

    assert_eq!(installed.get(&store), Version::new(1, 5, 0));
    assert_eq!(available.get(&store), Version::new(2, 0, 0));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_optional_property_lifecycle() {
    let mut store = MemoryStore::new();
    let pinned = OptionalVersionProperty::new("updater", "pinned");

    assert_eq!(pinned.get(&store), None);

    let version: Version = "3.0.0-beta.2".parse().unwrap();
    pinned.set(&mut store, Some(&version));
    assert_eq!(pinned.get(&store), Some(version));

    pinned.set(&mut store, None);
    assert_eq!(pinned.get(&store), None);
    assert!(store.is_empty());
}

#[test]
fn test_optional_property_ignores_corrupt_value() {
    let mut store = MemoryStore::new();
    store.set("updater.pinned", "not-a-version");

    let pinned = OptionalVersionProperty::new("updater", "pinned");
    assert_eq!(pinned.get(&store), None);
}

#[test]
fn test_stored_form_normalizes_on_round_trip() {
    let mut store = MemoryStore::new();
    store.set("updater.installed", "1.2");

    let property = VersionProperty::new("updater", "installed", Version::new(0, 0, 1));
    let read = property.get(&store);
    assert_eq!(read, Version::new(1, 2, 0));

    property.set(&mut store, &read);
    assert_eq!(store.get("updater.installed"), Some("1.2.0".to_string()));
}
