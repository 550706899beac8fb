//! Metadata identifier model and validation
//!
//! Pre-release and build metadata are dot-separated sequences of identifiers.
//! Each token is classified as numeric or alphanumeric at parse time; the
//! classification drives both validation and precedence comparison.
//!
//! Copyright (c) 2025 Versio Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, VersionError};
use std::cmp::Ordering;
use std::fmt;

/// A single pre-release or build metadata identifier
///
/// A token that parses entirely as a base-10 `u64` is `Numeric`; everything
/// else is `Alphanumeric`. Leading zeros in numeric tokens are accepted and
/// normalized by integer parsing. A run of digits too large for `u64` falls
/// back to the alphanumeric classification, where it remains valid and
/// compares lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Token consisting entirely of a base-10 unsigned integer
    Numeric(u64),
    /// Any other token; valid iff every character is in `[A-Za-z0-9-]`
    Alphanumeric(String),
}

/// Which metadata section an identifier belongs to
///
/// Only affects which error variant a validation failure raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    PreRelease,
    Build,
}

impl Identifier {
    /// Classify a raw dot-separated token
    pub(crate) fn classify(token: &str) -> Self {
        match token.parse::<u64>() {
            Ok(value) => Identifier::Numeric(value),
            Err(_) => Identifier::Alphanumeric(token.to_string()),
        }
    }

    /// Whether this identifier satisfies the SemVer character class
    ///
    /// Numeric identifiers are valid by construction. Alphanumeric
    /// identifiers must be non-empty and contain only `[A-Za-z0-9-]`.
    pub(crate) fn is_valid(&self) -> bool {
        match self {
            Identifier::Numeric(_) => true,
            Identifier::Alphanumeric(text) => {
                !text.is_empty()
                    && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{value}"),
            Identifier::Alphanumeric(text) => f.write_str(text),
        }
    }
}

impl Ord for Identifier {
    /// SemVer precedence between two identifiers at the same position
    ///
    /// Numeric identifiers compare by value, alphanumeric ones lexically by
    /// code point, and a numeric identifier is always lower precedence than
    /// an alphanumeric one regardless of value.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(lhs), Identifier::Numeric(rhs)) => lhs.cmp(rhs),
            (Identifier::Alphanumeric(lhs), Identifier::Alphanumeric(rhs)) => lhs.cmp(rhs),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a metadata section into a validated identifier sequence
///
/// Splits on `.`, classifies every token, and collects ALL invalid tokens
/// before failing so the error names the complete set of offenders. The
/// caller guarantees `text` is non-empty; an empty token between dots is
/// itself an invalid identifier.
pub(crate) fn parse_identifiers(text: &str, kind: MetadataKind) -> Result<Vec<Identifier>> {
    let identifiers: Vec<Identifier> = text.split('.').map(Identifier::classify).collect();

    let invalid: Vec<String> = identifiers
        .iter()
        .filter(|identifier| !identifier.is_valid())
        .map(ToString::to_string)
        .collect();

    if !invalid.is_empty() {
        return Err(match kind {
            MetadataKind::PreRelease => VersionError::InvalidPreReleaseMetadataIdentifiers {
                identifiers: invalid,
            },
            MetadataKind::Build => VersionError::InvalidBuildMetadataIdentifiers {
                identifiers: invalid,
            },
        });
    }

    Ok(identifiers)
}

/// Render an identifier sequence in its canonical dot-joined form
pub(crate) fn render(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
