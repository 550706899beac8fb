//! SemVer precedence comparison
//!
//! Implements the total precedence order over versions: the numeric core
//! first, then the release-beats-pre-release rule, then pairwise identifier
//! comparison. Build metadata is never consulted here; it participates in
//! value equality only.
//!
//! Copyright (c) 2025 Versio Team
//! Licensed under the Apache-2.0 license

use crate::identifier::Identifier;
use crate::version::Version;
use std::cmp::Ordering;

/// Compare two versions by SemVer precedence
///
/// Differs from `==` on `Version`: two versions with the same core and
/// pre-release but different build metadata compare `Equal` here while
/// being unequal values.
pub(crate) fn precedence(lhs: &Version, rhs: &Version) -> Ordering {
    let cores = (lhs.major, lhs.minor, lhs.patch).cmp(&(rhs.major, rhs.minor, rhs.patch));
    if cores != Ordering::Equal {
        return cores;
    }

    match (lhs.pre_release(), rhs.pre_release()) {
        (None, None) => Ordering::Equal,
        // A pre-release has lower precedence than the same core without one.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(lhs_ids), Some(rhs_ids)) => compare_identifier_sequences(lhs_ids, rhs_ids),
    }
}

/// Compare two pre-release identifier sequences position by position
///
/// The first differing position decides. If one sequence is a prefix of the
/// other, the longer sequence has higher precedence, so the loop falls
/// through to a length comparison and no position is ever left undecided.
fn compare_identifier_sequences(lhs: &[Identifier], rhs: &[Identifier]) -> Ordering {
    for (lhs_id, rhs_id) in lhs.iter().zip(rhs) {
        match lhs_id.cmp(rhs_id) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    lhs.len().cmp(&rhs.len())
}
