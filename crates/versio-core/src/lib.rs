//! Versio Core - Semantic-version value type
//!
//! This crate parses version strings into a structured, totally-ordered
//! representation, validates them against the SemVer 2.0.0 grammar, and
//! renders them back to a canonical string.
//!
//! # Main Components
//!
//! - **Error Handling**: Parsing error taxonomy using `thiserror`
//! - **Identifier Model**: Numeric/alphanumeric metadata classification
//! - **Parser**: Strict decomposition of `MAJOR.MINOR.PATCH[-PRE][+BUILD]`
//! - **Comparator**: SemVer precedence ordering (build metadata excluded)
//! - **Formatter**: Canonical rendering, the inverse of parsing
//!
//! # Example
//!
//! ```
//! use versio_core::{parse, Version};
//!
//! let released = parse("1.0.0")?;
//! let candidate: Version = "1.0.0-rc.1+build.5".parse()?;
//!
//! assert!(candidate < released);
//! assert_eq!(candidate.to_string(), "1.0.0-rc.1+build.5");
//! # Ok::<(), versio_core::VersionError>(())
//! ```
//!
//! All operations are pure functions over immutable values; a `Version` is
//! never mutated after construction and is safe to share across threads.

mod compare;
pub mod error;
pub mod identifier;
mod parser;
pub mod version;

// Re-export main types for convenience
pub use error::{Result, VersionError};
pub use identifier::{Identifier, MetadataKind};
pub use version::Version;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a version string
///
/// Convenience wrapper around `Version`'s `FromStr` implementation.
pub fn parse(text: &str) -> Result<Version> {
    text.parse()
}
