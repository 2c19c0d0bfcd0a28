//! Driving ports: the surfaces the host and the front door call.

use crate::error::ParacrossResult;
use crate::ports::outbound::{CoinsAccess, KvStore};
use paracross_types::{Address, ParacrossAction, ParacrossHeightStatus, ParacrossStatus, Receipt};

/// Per-transaction ambient context, assembled by the host for each
/// delivered transaction. The executor keeps no state of its own between
/// transactions; everything it needs arrives here.
pub struct ExecContext<'a> {
    /// Snapshot-consistent KV capability for this transaction.
    pub kv: &'a dyn KvStore,
    /// Account-module capability. Unused by the commit path.
    pub coins: &'a dyn CoinsAccess,
    /// Hash of the transaction being executed.
    pub tx_hash: Vec<u8>,
    /// Caller-derived submitter address.
    pub from_addr: Address,
    /// Main-chain block timestamp.
    pub block_time: i64,
    /// Main-chain block height.
    pub block_height: i64,
    /// Address of this executor on the main chain.
    pub exec_addr: Address,
}

/// The executor entrypoint: one already-ordered transaction in, one
/// receipt out. Any error means the host discards the delta; the
/// executor guarantees no write was emitted on a rejection path.
pub trait TransactionExecutor: Send + Sync {
    /// Execute one transaction, dispatching on its action kind.
    fn exec(&self, ctx: &ExecContext<'_>, action: &ParacrossAction) -> ParacrossResult<Receipt>;
}

/// Read-only lookups for the front door. Pure reads over the same
/// persisted state the executor writes; no transaction replay.
pub trait ParacrossQuery: Send + Sync {
    /// Current cursor of a title. A title that never reached consensus
    /// reports the zero-value cursor.
    fn title_status(&self, title: &str) -> ParacrossResult<ParacrossStatus>;

    /// Aggregation record at (title, height), if one exists.
    fn title_height_status(
        &self,
        title: &str,
        height: i64,
    ) -> ParacrossResult<Option<ParacrossHeightStatus>>;
}
