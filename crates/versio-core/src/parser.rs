//! Version string decomposition and core parsing
//!
//! Parsing runs in three stages: decompose the raw string into core,
//! pre-release, and build substrings; parse the numeric core triple; then
//! hand the metadata substrings to identifier validation via
//! [`Version::with_metadata`]. Errors surface in that order, so a malformed
//! core is reported before any metadata problem.
//!
//! Copyright (c) 2025 Versio Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, VersionError};
use crate::version::Version;

/// Raw substrings of a version string before any validation
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    pub core: &'a str,
    pub pre_release: Option<&'a str>,
    pub build: Option<&'a str>,
}

/// Parse a complete version string
///
/// This is the entry point behind [`Version::from_str`] and the crate-root
/// `parse` convenience function.
pub(crate) fn parse(text: &str) -> Result<Version> {
    let parts = decompose(text)?;
    let (major, minor, patch) = parse_core(parts.core)?;

    Version::with_metadata(major, minor, patch, parts.pre_release, parts.build)
}

/// Split a raw version string into core, pre-release, and build substrings
///
/// The build section is everything after the first `+`; more than one `+` is
/// rejected, naming every segment after the first split. The remainder is
/// split once on the first `-` to separate the pre-release section from the
/// numeric core. Empty sections are passed through and rejected during
/// construction, so string parsing and the raw-metadata constructor share
/// the same checks.
pub(crate) fn decompose(text: &str) -> Result<RawParts<'_>> {
    let build_segments: Vec<&str> = text.split('+').collect();
    if build_segments.len() > 2 {
        return Err(VersionError::MultipleBuildMetadata {
            identifiers: build_segments[1..].iter().map(|s| s.to_string()).collect(),
        });
    }

    let build = build_segments.get(1).copied();
    let (core, pre_release) = match build_segments[0].split_once('-') {
        Some((core, pre_release)) => (core, Some(pre_release)),
        None => (build_segments[0], None),
    };

    Ok(RawParts {
        core,
        pre_release,
        build,
    })
}

/// Parse the `major.minor.patch` core substring
///
/// Accepts between one and three dot-separated components; missing trailing
/// components default to zero, so `"1"` parses as `(1, 0, 0)`. Every present
/// component must parse entirely as a `u64`. Any violation reports the whole
/// core substring as offending text.
pub(crate) fn parse_core(text: &str) -> Result<(u64, u64, u64)> {
    let invalid = || VersionError::InvalidCoreFormat {
        text: text.to_string(),
    };

    let components: Vec<&str> = text.split('.').collect();
    if components.len() > 3 {
        return Err(invalid());
    }

    let mut numbers = [0u64; 3];
    for (slot, component) in numbers.iter_mut().zip(&components) {
        *slot = component.parse().map_err(|_| invalid())?;
    }

    Ok((numbers[0], numbers[1], numbers[2]))
}
