//! # Receipt Taxonomy
//!
//! A receipt is the executor's return value for one transaction: the KV
//! mutations to apply and the logs to index, as one atomic unit. Three
//! log kinds exist:
//!
//! | Kind | Emitted when |
//! |------|--------------|
//! | `Commit` | A vote was accepted at the current height. |
//! | `Record` | A vote arrived for an already-finalized height (audit only). |
//! | `Done`   | This very vote crossed the supermajority threshold. |
//!
//! External indexers rely on the ordering contract: at most one `Commit`
//! log per transaction, at most one `Done` log per transaction always
//! following its `Commit` log, and `Record` logs never co-occurring with
//! either.

use crate::entities::{Address, ParacrossHeightStatus, ParacrossNodeStatus, StateHash};
use serde::{Deserialize, Serialize};

/// Outcome tag carried on every receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecTy {
    /// The transaction was rejected; no mutations apply.
    Err,
    /// The transaction executed; KV delta and logs apply atomically.
    Ok,
}

/// One KV mutation. Entries apply in order, so a later entry under the
/// same key supersedes an earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Storage key, from the paracross key codec.
    pub key: Vec<u8>,
    /// Canonical encoded value.
    pub value: Vec<u8>,
}

/// Discriminant of a receipt log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    /// Payload decodes as [`CommitLog`].
    Commit,
    /// Payload decodes as [`RecordLog`].
    Record,
    /// Payload decodes as [`DoneLog`].
    Done,
}

/// One log entry: a kind tag plus the canonical encoding of its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLog {
    /// Which payload shape `payload` decodes as.
    pub kind: LogKind,
    /// Canonical encoded log payload.
    pub payload: Vec<u8>,
}

/// The atomic result of executing one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Outcome tag; everything this executor emits is `Ok`.
    pub ty: ExecTy,
    /// KV mutations to apply, in order.
    pub kv: Vec<KeyValue>,
    /// Logs to index, in emission order.
    pub logs: Vec<ReceiptLog>,
}

impl Receipt {
    /// A successful receipt from its delta and logs.
    pub fn exec_ok(kv: Vec<KeyValue>, logs: Vec<ReceiptLog>) -> Self {
        Self {
            ty: ExecTy::Ok,
            kv,
            logs,
        }
    }

    /// Append another receipt's delta and logs after this one's,
    /// preserving emission order. Used to attach a Done emission to the
    /// Commit emission of the same transaction.
    pub fn merge(&mut self, other: Receipt) {
        self.kv.extend(other.kv);
        self.logs.extend(other.logs);
    }
}

/// Payload of a `Commit` log: who voted, what they asserted, and the
/// aggregation record before and after the vote. `prev` is absent for
/// the first vote at a height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLog {
    /// The submitting validator.
    pub addr: Address,
    /// The submitted (title, height, state root).
    pub status: ParacrossNodeStatus,
    /// Aggregation record before this vote, absent for the first vote.
    pub prev: Option<ParacrossHeightStatus>,
    /// Aggregation record after this vote.
    pub current: ParacrossHeightStatus,
}

/// Payload of a `Record` log: a late vote for a finalized height, kept
/// for audit without touching state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLog {
    /// The submitting validator.
    pub addr: Address,
    /// The submitted (title, height, state root).
    pub status: ParacrossNodeStatus,
}

/// Payload of a `Done` log: the tally that crossed the threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoneLog {
    /// `[most, commit count, roster size]` at the moment of consensus.
    pub counts: [i32; 3],
    /// Side-chain title that reached consensus.
    pub title: String,
    /// Height that reached consensus.
    pub height: i64,
    /// The winning state root.
    pub state_hash: StateHash,
}
