//! # Core Domain Entities
//!
//! The persisted and submitted shapes of the paracross executor.
//!
//! ## Clusters
//!
//! - **Configuration**: `ConfigItem`, `ConfigArray` — the validator roster
//!   of one side-chain title, written by the configuration executor and
//!   read-only here.
//! - **Consensus state**: `ParacrossStatus` (the per-title cursor) and
//!   `ParacrossHeightStatus` (the per-height aggregation record).
//! - **Submissions**: `ParacrossAction` and its `Commit` payload, carried
//!   by host-chain transactions.

use serde::{Deserialize, Serialize};

/// A host-chain account address, in the string form the host's key module
/// produces. Roster entries and commit submitters use this form.
pub type Address = String;

/// A side-chain state root as submitted by a validator (hex string).
pub type StateHash = String;

// =============================================================================
// CLUSTER A: CONFIGURATION
// =============================================================================

/// Array payload of a configuration item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigArray {
    /// Configured values, in configuration order.
    pub value: Vec<Address>,
}

/// One item of chain configuration, as persisted by the configuration
/// executor. The paracross roster for title `T` lives in an item whose
/// array holds the authorized validator addresses.
///
/// A well-formed item whose array is absent means "configured, then the
/// members were removed": it decodes to an empty roster, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    /// Configuration key this item was stored under.
    pub key: String,
    /// Configured members, absent when the entry was cleared.
    pub arr: Option<ConfigArray>,
}

impl ConfigItem {
    /// The roster carried by this item, empty when the array was cleared.
    pub fn members(&self) -> &[Address] {
        self.arr.as_ref().map(|a| a.value.as_slice()).unwrap_or(&[])
    }
}

// =============================================================================
// CLUSTER B: CONSENSUS STATE
// =============================================================================

/// Consensus progress of one (title, height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CommitStatus {
    /// Votes are being aggregated; supermajority not yet reached.
    #[default]
    Committing,
    /// Supermajority reached. The record is frozen.
    Done,
}

/// Per-title cursor: the greatest height at which this title reached
/// supermajority. The zero value (height 0) is the state of a title that
/// has never finalized a height; the first height that can reach
/// consensus is therefore 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParacrossStatus {
    /// Side-chain title this cursor tracks.
    pub title: String,
    /// Greatest height with a Done record, 0 before any.
    pub height: i64,
}

/// The parallel vote sequences of one aggregation record: `addrs[i]`
/// submitted `state_hash[i]`. The sequences always have equal length and
/// addresses never repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParacrossStatusDetails {
    /// Validators that have submitted, in arrival order.
    pub addrs: Vec<Address>,
    /// State roots they submitted, parallel to `addrs`.
    pub state_hash: Vec<StateHash>,
}

/// Aggregation record for one (title, height): the running tally of
/// received commits and its consensus status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParacrossHeightStatus {
    /// Committing until supermajority, Done after.
    pub status: CommitStatus,
    /// Side-chain title.
    pub title: String,
    /// Side-chain height being voted on.
    pub height: i64,
    /// The votes received so far.
    pub details: ParacrossStatusDetails,
}

impl ParacrossHeightStatus {
    /// Record created by the first vote at a height.
    pub fn first_vote(title: &str, height: i64, addr: &str, state_hash: &str) -> Self {
        Self {
            status: CommitStatus::Committing,
            title: title.to_string(),
            height,
            details: ParacrossStatusDetails {
                addrs: vec![addr.to_string()],
                state_hash: vec![state_hash.to_string()],
            },
        }
    }

    /// Append one vote to the parallel sequences.
    pub fn push_vote(&mut self, addr: &str, state_hash: &str) {
        self.details.addrs.push(addr.to_string());
        self.details.state_hash.push(state_hash.to_string());
    }

    /// Whether this address already voted at this height.
    pub fn has_voted(&self, addr: &str) -> bool {
        self.details.addrs.iter().any(|a| a == addr)
    }

    /// Number of votes received.
    pub fn commit_count(&self) -> usize {
        self.details.addrs.len()
    }
}

// =============================================================================
// CLUSTER C: SUBMISSIONS
// =============================================================================

/// The payload one validator asserts in a commit: "at `height` of
/// side-chain `title`, my state root was `state_hash`".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParacrossNodeStatus {
    /// Side-chain title.
    pub title: String,
    /// Side-chain height the root was computed at.
    pub height: i64,
    /// The asserted state root.
    pub state_hash: StateHash,
}

/// Commit action carried by a paracross transaction. The status is
/// optional at the wire level; an absent status is rejected during
/// payload validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParacrossCommitAction {
    /// The asserted (title, height, state root), if present.
    pub status: Option<ParacrossNodeStatus>,
}

/// Action kinds the paracross executor dispatches on. `Commit` is the
/// only kind defined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParacrossAction {
    /// A validator's state-root assertion for one (title, height).
    Commit(ParacrossCommitAction),
}
