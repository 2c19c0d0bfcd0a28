//! Plurality count over the vote set of one aggregation record.

use paracross_types::{Address, ParacrossHeightStatus, StateHash};
use std::collections::HashMap;

/// The plurality of one vote set: the maximum multiplicity among the
/// submitted state roots, and a root achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plurality {
    /// Maximum multiplicity.
    pub most: usize,
    /// A state root with that multiplicity. When several tie, whichever
    /// the count iteration yields first; the Done predicate cannot hold
    /// for two roots at once, so ties never decide consensus.
    pub state_hash: StateHash,
}

/// One-pass plurality count over the record's parallel vote sequences.
/// Returns `None` for a record with no votes.
pub fn most_common(stat: &ParacrossHeightStatus) -> Option<Plurality> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for hash in &stat.details.state_hash {
        *counts.entry(hash.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(hash, most)| Plurality {
            most,
            state_hash: hash.to_string(),
        })
}

/// Strict supermajority: more than two-thirds of the roster voted for
/// the same state root.
pub fn is_commit_done(most: usize, roster: &[Address]) -> bool {
    most * 3 > roster.len() * 2
}
