//! Ports of the executor: inbound (what the host and front door call)
//! and outbound (the capabilities the host provides).

pub mod inbound;
pub mod outbound;

pub use inbound::{ExecContext, ParacrossQuery, TransactionExecutor};
pub use outbound::{CoinsAccess, KvStore};
