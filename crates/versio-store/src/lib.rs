//! Key-value-store-backed version properties
//!
//! This crate provides the persistence glue around `versio-core`: named
//! properties that read and write a version's canonical string form through
//! a pluggable string key-value store.
//!
//! Reading is deliberately forgiving. A [`VersionProperty`] substitutes a
//! caller-supplied default when the stored value is absent or unparsable;
//! an [`OptionalVersionProperty`] yields `None` instead. The core library
//! itself never swallows a parse error; that policy lives here only.
//!
//! # Example
//!
//! ```
//! use versio_core::Version;
//! use versio_store::{MemoryStore, VersionProperty};
//!
//! let mut store = MemoryStore::new();
//! let last_seen = VersionProperty::new("app", "last-seen", Version::new(1, 0, 0));
//!
//! assert_eq!(last_seen.get(&store), Version::new(1, 0, 0));
//!
//! last_seen.set(&mut store, &Version::new(2, 1, 0));
//! assert_eq!(last_seen.get(&store), Version::new(2, 1, 0));
//! ```

pub mod property;
pub mod store;

pub use property::{OptionalVersionProperty, VersionProperty};
pub use store::{MemoryStore, StringStore};
