//! Pure predicates over commit payloads, rosters, and heights.

use paracross_types::{Address, ParacrossCommitAction, ParacrossNodeStatus};

/// Where an incoming commit's height sits relative to the title cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeightClass {
    /// At or below the cursor: consensus already reached, audit only.
    Stale,
    /// Exactly cursor + 1: the height being voted on.
    Current,
    /// Beyond cursor + 1: the chain has not reached the predecessor yet.
    Future,
}

/// Classify `height` against the title cursor.
pub fn classify_height(height: i64, cursor_height: i64) -> HeightClass {
    if height <= cursor_height {
        HeightClass::Stale
    } else if height == cursor_height + 1 {
        HeightClass::Current
    } else {
        HeightClass::Future
    }
}

/// A title names one side-chain and must be non-empty.
pub fn valid_title(title: &str) -> bool {
    !title.is_empty()
}

/// Structural validation of a commit payload. Returns the inner status
/// when it is present and well-formed.
pub fn check_commit_payload(
    commit: &ParacrossCommitAction,
) -> Result<&ParacrossNodeStatus, &'static str> {
    let status = commit.status.as_ref().ok_or("status is absent")?;
    if status.state_hash.is_empty() {
        return Err("state hash is empty");
    }
    if !valid_title(&status.title) {
        return Err("title is empty");
    }
    if status.height < 0 {
        return Err("height is negative");
    }
    Ok(status)
}

/// Linear membership test against the roster. Duplicate roster entries
/// are tolerated.
pub fn is_member(addr: &str, roster: &[Address]) -> bool {
    roster.iter().any(|node| node == addr)
}
