//! Version property accessors
//!
//! Thin glue over a [`StringStore`]: a property is addressed by a domain and
//! a name, stores a version's canonical string form, and decides what to do
//! when the stored value is absent or unparsable. This is the only layer
//! allowed to swallow a parse error; the core always propagates.

use crate::store::StringStore;
use tracing::{debug, warn};
use versio_core::{Result, Version};

/// A stored version with a fallback default
///
/// Reading never fails: an absent or unparsable stored value yields the
/// caller-supplied default instead of an error. Writing stores the
/// canonical string form.
#[derive(Debug, Clone)]
pub struct VersionProperty {
    domain: String,
    name: String,
    default: Version,
}

impl VersionProperty {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, default: Version) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            default,
        }
    }

    /// Create a property whose default is given as a version string
    ///
    /// Fails if the default itself does not parse.
    pub fn parse_default(
        domain: impl Into<String>,
        name: impl Into<String>,
        default: &str,
    ) -> Result<Self> {
        Ok(Self::new(domain, name, default.parse()?))
    }

    /// The store key this property reads and writes
    pub fn key(&self) -> String {
        format!("{}.{}", self.domain, self.name)
    }

    /// The fallback version returned when nothing usable is stored
    pub fn default_version(&self) -> &Version {
        &self.default
    }

    /// Read the stored version, falling back to the default
    pub fn get<S: StringStore>(&self, store: &S) -> Version {
        match read(store, &self.key()) {
            Some(version) => version,
            None => self.default.clone(),
        }
    }

    /// Write the canonical string form of `version`
    pub fn set<S: StringStore>(&self, store: &mut S, version: &Version) {
        write(store, &self.key(), version);
    }
}

/// A stored version without a default
///
/// Reading yields `None` when the key is absent or the stored value does
/// not parse. Writing `None` removes the key.
#[derive(Debug, Clone)]
pub struct OptionalVersionProperty {
    domain: String,
    name: String,
}

impl OptionalVersionProperty {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// The store key this property reads and writes
    pub fn key(&self) -> String {
        format!("{}.{}", self.domain, self.name)
    }

    /// Read the stored version, if present and parsable
    pub fn get<S: StringStore>(&self, store: &S) -> Option<Version> {
        read(store, &self.key())
    }

    /// Write the canonical string form, or remove the key on `None`
    pub fn set<S: StringStore>(&self, store: &mut S, version: Option<&Version>) {
        match version {
            Some(version) => write(store, &self.key(), version),
            None => store.remove(&self.key()),
        }
    }
}

fn read<S: StringStore>(store: &S, key: &str) -> Option<Version> {
    let text = store.get(key)?;
    match text.parse() {
        Ok(version) => Some(version),
        Err(error) => {
            warn!(key = %key, stored = %text, %error, "stored version is unparsable");
            None
        }
    }
}

fn write<S: StringStore>(store: &mut S, key: &str, version: &Version) {
    let canonical = version.to_string();
    debug!(key = %key, version = %canonical, "storing version");
    store.set(key, &canonical);
}
