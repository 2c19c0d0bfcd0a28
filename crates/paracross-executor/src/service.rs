//! Commit state machine and query surface.
//!
//! The executor is invoked by the host with one already-ordered
//! transaction at a time and a snapshot-consistent KV capability. One
//! call drives the whole pipeline: payload validation, roster
//! membership, height classification, vote aggregation, plurality tally,
//! receipt assembly, and write-through persistence.
//!
//! Transitions of one (title, height) record:
//!
//! ```text
//! [Absent] ──first vote──→ [Committing] ──vote──→ [Committing]
//!                               │
//!                          vote crossing 2/3
//!                               ↓
//!                            [Done]  (terminal; later votes are stale Records)
//! ```

use crate::domain::{
    check_commit_payload, classify_height, is_commit_done, is_member, make_commit_receipt,
    make_done_receipt, make_record_receipt, most_common, HeightClass,
};
use crate::error::{ParacrossError, ParacrossResult};
use crate::ports::inbound::{ExecContext, ParacrossQuery, TransactionExecutor};
use crate::ports::outbound::KvStore;
use crate::state;
use paracross_types::{
    CommitStatus, ParacrossAction, ParacrossCommitAction, ParacrossHeightStatus, ParacrossStatus,
    Receipt,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What to do with a second vote from the same address at one height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateVotePolicy {
    /// Reject the transaction as bad input. No state changes.
    #[default]
    Reject,
    /// Acknowledge with a Commit receipt but leave the record untouched.
    Ignore,
}

/// Executor configuration.
#[derive(Clone, Debug, Default)]
pub struct ParacrossConfig {
    /// Duplicate-vote handling at one (title, height).
    pub duplicate_vote: DuplicateVotePolicy,
}

/// The paracross executor. Stateless between transactions: every call
/// is a function of (context, transaction, KV snapshot).
#[derive(Clone, Debug, Default)]
pub struct ParacrossExecutor {
    config: ParacrossConfig,
}

impl ParacrossExecutor {
    /// Create an executor with the given configuration.
    pub fn new(config: ParacrossConfig) -> Self {
        Self { config }
    }

    /// Process one commit: a validator's state-root assertion for one
    /// (title, height).
    ///
    /// Rejections (`BadInput`, nothing written, no receipt): malformed
    /// payload, unknown title, non-member submitter, future height,
    /// duplicate vote under the `Reject` policy.
    fn commit(
        &self,
        ctx: &ExecContext<'_>,
        commit: &ParacrossCommitAction,
    ) -> ParacrossResult<Receipt> {
        let status = check_commit_payload(commit).map_err(|reason| {
            warn!("[paracross] rejected commit from {}: {reason}", ctx.from_addr);
            ParacrossError::bad_input(reason)
        })?;

        let roster = state::get_roster(ctx.kv, &status.title)?.ok_or_else(|| {
            ParacrossError::bad_input(format!("no roster configured for title {}", status.title))
        })?;

        if !is_member(&ctx.from_addr, &roster) {
            warn!(
                "[paracross] {} is not a validator of title {}",
                ctx.from_addr, status.title
            );
            return Err(ParacrossError::bad_input(format!(
                "{} is not a validator of title {}",
                ctx.from_addr, status.title
            )));
        }

        let cursor = state::get_cursor(ctx.kv, &status.title)?;
        match classify_height(status.height, cursor.height) {
            HeightClass::Future => {
                return Err(ParacrossError::bad_input(format!(
                    "future height {} for title {} (expected {})",
                    status.height,
                    status.title,
                    cursor.height + 1
                )));
            }
            HeightClass::Stale => {
                // Consensus at this height is settled; keep the late vote
                // in the audit trail without touching state.
                debug!(
                    "[paracross] recorded late vote by {} for {} height {}",
                    ctx.from_addr, status.title, status.height
                );
                return make_record_receipt(&ctx.from_addr, status);
            }
            HeightClass::Current => {}
        }

        let (prev, mut stat) = match state::get_agg(ctx.kv, &status.title, status.height)? {
            None => (
                None,
                ParacrossHeightStatus::first_vote(
                    &status.title,
                    status.height,
                    &ctx.from_addr,
                    &status.state_hash,
                ),
            ),
            Some(existing) => {
                if existing.has_voted(&ctx.from_addr) {
                    match self.config.duplicate_vote {
                        DuplicateVotePolicy::Reject => {
                            return Err(ParacrossError::bad_input(format!(
                                "{} already voted for {} height {}",
                                ctx.from_addr, status.title, status.height
                            )));
                        }
                        DuplicateVotePolicy::Ignore => {
                            debug!(
                                "[paracross] ignored duplicate vote by {} for {} height {}",
                                ctx.from_addr, status.title, status.height
                            );
                            return make_commit_receipt(
                                &ctx.from_addr,
                                status,
                                Some(&existing),
                                &existing,
                            );
                        }
                    }
                }
                let snapshot = existing.clone();
                let mut updated = existing;
                updated.push_vote(&ctx.from_addr, &status.state_hash);
                (Some(snapshot), updated)
            }
        };

        let mut receipt = make_commit_receipt(&ctx.from_addr, status, prev.as_ref(), &stat)?;

        let commit_count = stat.commit_count();
        let done = most_common(&stat).filter(|p| is_commit_done(p.most, &roster));

        match done {
            Some(plurality) => {
                stat.status = CommitStatus::Done;
                let advanced = ParacrossStatus {
                    title: status.title.clone(),
                    height: status.height,
                };
                receipt.merge(make_done_receipt(
                    status,
                    &stat,
                    &advanced,
                    plurality.most,
                    commit_count,
                    roster.len(),
                )?);
                state::put_agg(ctx.kv, &stat)?;
                state::put_cursor(ctx.kv, &advanced)?;
                info!(
                    "[paracross] title {} reached consensus at height {}: {} of {} nodes on {}",
                    status.title,
                    status.height,
                    plurality.most,
                    roster.len(),
                    plurality.state_hash
                );
            }
            None => {
                state::put_agg(ctx.kv, &stat)?;
                debug!(
                    "[paracross] vote {} of {} recorded for {} height {}",
                    commit_count,
                    roster.len(),
                    status.title,
                    status.height
                );
            }
        }

        Ok(receipt)
    }
}

impl TransactionExecutor for ParacrossExecutor {
    fn exec(&self, ctx: &ExecContext<'_>, action: &ParacrossAction) -> ParacrossResult<Receipt> {
        match action {
            ParacrossAction::Commit(commit) => self.commit(ctx, commit),
        }
    }
}

/// Read-only query surface backed by the persisted state. The front
/// door holds one of these; the write path stays transaction-only.
pub struct QueryService {
    kv: Arc<dyn KvStore>,
}

impl QueryService {
    /// Query surface over the given KV handle.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }
}

impl ParacrossQuery for QueryService {
    fn title_status(&self, title: &str) -> ParacrossResult<ParacrossStatus> {
        state::get_cursor(self.kv.as_ref(), title)
    }

    fn title_height_status(
        &self,
        title: &str,
        height: i64,
    ) -> ParacrossResult<Option<ParacrossHeightStatus>> {
        state::get_agg(self.kv.as_ref(), title, height)
    }
}
