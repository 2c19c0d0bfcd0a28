//! Receipt builders: pure value constructors for the three receipt
//! shapes. Builders never touch storage; persisting the same values is
//! the state machine's job.

use crate::domain::keys;
use crate::error::ParacrossResult;
use paracross_types::{
    encode, CommitLog, DoneLog, KeyValue, LogKind, ParacrossHeightStatus, ParacrossNodeStatus,
    ParacrossStatus, Receipt, ReceiptLog, RecordLog,
};

/// Receipt for a vote accepted at the current height: the re-encoded
/// aggregation record plus a `Commit` log carrying the before/after pair.
pub fn make_commit_receipt(
    addr: &str,
    status: &ParacrossNodeStatus,
    prev: Option<&ParacrossHeightStatus>,
    current: &ParacrossHeightStatus,
) -> ParacrossResult<Receipt> {
    let log = CommitLog {
        addr: addr.to_string(),
        status: status.clone(),
        prev: prev.cloned(),
        current: current.clone(),
    };
    Ok(Receipt::exec_ok(
        vec![KeyValue {
            key: keys::title_height(&status.title, status.height),
            value: encode(current)?,
        }],
        vec![ReceiptLog {
            kind: LogKind::Commit,
            payload: encode(&log)?,
        }],
    ))
}

/// Receipt for a vote at an already-finalized height: a `Record` log for
/// the audit trail, no KV delta.
pub fn make_record_receipt(addr: &str, status: &ParacrossNodeStatus) -> ParacrossResult<Receipt> {
    let log = RecordLog {
        addr: addr.to_string(),
        status: status.clone(),
    };
    Ok(Receipt::exec_ok(
        Vec::new(),
        vec![ReceiptLog {
            kind: LogKind::Record,
            payload: encode(&log)?,
        }],
    ))
}

/// Receipt for the vote that crossed the supermajority threshold: the
/// frozen record, the advanced cursor, and a `Done` log with the tally.
/// Merged after the Commit receipt of the same transaction, so its
/// entries supersede the Commit entry under the record key.
pub fn make_done_receipt(
    status: &ParacrossNodeStatus,
    current: &ParacrossHeightStatus,
    cursor: &ParacrossStatus,
    most: usize,
    commit_count: usize,
    roster_size: usize,
) -> ParacrossResult<Receipt> {
    let log = DoneLog {
        counts: [most as i32, commit_count as i32, roster_size as i32],
        title: status.title.clone(),
        height: status.height,
        state_hash: status.state_hash.clone(),
    };
    Ok(Receipt::exec_ok(
        vec![
            KeyValue {
                key: keys::title_height(&status.title, status.height),
                value: encode(current)?,
            },
            KeyValue {
                key: keys::title(&status.title),
                value: encode(cursor)?,
            },
        ],
        vec![ReceiptLog {
            kind: LogKind::Done,
            payload: encode(&log)?,
        }],
    ))
}
