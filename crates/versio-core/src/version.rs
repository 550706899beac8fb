//! The `Version` value type
//!
//! An immutable semantic version: the `major.minor.patch` core plus optional
//! pre-release and build metadata. Construction always validates, so every
//! `Version` in existence satisfies the grammar; comparison and formatting
//! are total from there on.

use crate::compare;
use crate::error::{Result, VersionError};
use crate::identifier::{self, Identifier, MetadataKind};
use crate::parser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A semantic version per SemVer 2.0.0
///
/// Equality is full value equality: core, pre-release, and build metadata
/// must all match. Precedence ordering ignores build metadata, so `==` is
/// strictly stronger than [`Version::precedence`] returning `Equal`. The
/// relational operators follow precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pre_release: Option<Vec<Identifier>>,
    build: Option<Vec<Identifier>>,
}

impl Version {
    /// Create a version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version with raw pre-release and build metadata strings
    ///
    /// The metadata strings are validated here: an empty string raises
    /// [`VersionError::EmptyBuild`] or [`VersionError::EmptyPreRelease`]
    /// (build is checked first), and invalid identifiers raise the
    /// corresponding identifier error naming every offending token.
    pub fn with_metadata(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self> {
        let build = match build {
            None => None,
            Some(text) if text.is_empty() => return Err(VersionError::EmptyBuild),
            Some(text) => Some(identifier::parse_identifiers(text, MetadataKind::Build)?),
        };

        let pre_release = match pre_release {
            None => None,
            Some(text) if text.is_empty() => return Err(VersionError::EmptyPreRelease),
            Some(text) => Some(identifier::parse_identifiers(
                text,
                MetadataKind::PreRelease,
            )?),
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// The pre-release identifier sequence, if any
    ///
    /// A present sequence is never empty.
    pub fn pre_release(&self) -> Option<&[Identifier]> {
        self.pre_release.as_deref()
    }

    /// The build metadata identifier sequence, if any
    pub fn build(&self) -> Option<&[Identifier]> {
        self.build.as_deref()
    }

    /// The pre-release section in its canonical dot-joined form
    pub fn pre_release_str(&self) -> Option<String> {
        self.pre_release().map(identifier::render)
    }

    /// The build metadata section in its canonical dot-joined form
    pub fn build_str(&self) -> Option<String> {
        self.build().map(identifier::render)
    }

    /// Compare two versions by SemVer precedence
    ///
    /// Build metadata never affects the result, so `Equal` does not imply
    /// `==`; use `==` for value equality.
    pub fn precedence(&self, other: &Version) -> Ordering {
        compare::precedence(self, other)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self> {
        parser::parse(text)
    }
}

impl fmt::Display for Version {
    /// Canonical rendering: re-parsing the output yields an equal version
    ///
    /// Not guaranteed to reproduce the original input verbatim: omitted
    /// trailing core components are filled in and leading zeros in numeric
    /// metadata identifiers are normalized away.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre_release) = self.pre_release() {
            write!(f, "-{}", identifier::render(pre_release))?;
        }
        if let Some(build) = self.build() {
            write!(f, "+{}", identifier::render(build))?;
        }

        Ok(())
    }
}

impl PartialOrd for Version {
    /// Precedence ordering; see [`Version::precedence`]
    ///
    /// `Version` deliberately does not implement `Ord`: precedence treats
    /// versions differing only in build metadata as equal while `Eq` does
    /// not, and a total order consistent with `Eq` would have to consult
    /// build metadata, which SemVer forbids.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.precedence(other))
    }
}

impl Serialize for Version {
    /// Encodes as a single string: the canonical form
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    /// Decodes by parsing a string, surfacing the same parsing errors
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
