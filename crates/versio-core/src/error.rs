//! Error types for the versio core library
//!
//! This module defines the parsing error taxonomy using thiserror for
//! ergonomic error definitions. Comparison and formatting are total
//! operations and never produce an error.

use thiserror::Error;

/// Main error type for version parsing and construction
///
/// Every variant carries the offending input so callers can report
/// exactly which part of a version string was rejected. Identifier
/// validation collects all invalid tokens before failing, not just
/// the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The `major.minor.patch` core is malformed
    #[error("invalid version core {text:?}: expected 1-3 dot-separated numeric components")]
    InvalidCoreFormat { text: String },

    /// One or more pre-release identifiers contain characters outside `[A-Za-z0-9-]`
    #[error("invalid pre-release metadata identifiers: {identifiers:?}")]
    InvalidPreReleaseMetadataIdentifiers { identifiers: Vec<String> },

    /// One or more build identifiers contain characters outside `[A-Za-z0-9-]`
    #[error("invalid build metadata identifiers: {identifiers:?}")]
    InvalidBuildMetadataIdentifiers { identifiers: Vec<String> },

    /// More than one `+`-delimited build metadata section
    #[error("multiple build metadata sections: {identifiers:?}")]
    MultipleBuildMetadata { identifiers: Vec<String> },

    /// A `-` separator was present but the pre-release text was empty
    #[error("empty pre-release metadata")]
    EmptyPreRelease,

    /// A `+` separator was present but the build text was empty
    #[error("empty build metadata")]
    EmptyBuild,
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, VersionError>;
