//! # Paracross Executor — Cross-Commit Consensus Subsystem
//!
//! Notarization engine for parallel side-chains: validator nodes of a
//! side-chain each compute the state root of a side-chain block height
//! and submit it to the main chain as a *commit* transaction. This
//! executor aggregates the commits per (title, height), detects
//! supermajority agreement on one root, promotes the height to *done*,
//! and advances the title's canonical height cursor.
//!
//! ## Role in System
//!
//! - **Host-driven**: the host chain delivers already-ordered
//!   transactions one at a time; there is no networking, gossip, or
//!   leader election here, and signatures are verified upstream.
//! - **Snapshot-pure**: each call is a function of (context,
//!   transaction, KV snapshot) → (receipt, delta). Replaying the same
//!   transaction stream over the same initial state produces
//!   byte-identical mutations and logs.
//! - **Atomic receipts**: the receipt's KV delta is the commit unit; on
//!   any error the host discards it, and no rejection path writes.
//!
//! ## Commit Pipeline
//!
//! | Stage | Module | Outcome |
//! |-------|--------|---------|
//! | Payload validation | `domain::validate` | `BadInput` on malformed commits |
//! | Roster membership | `state` + `domain::validate` | `BadInput` for non-members |
//! | Height classification | `domain::validate` | Future → reject, Stale → Record receipt |
//! | Vote aggregation | `service` | Record created or extended, double votes policed |
//! | Plurality tally | `domain::tally` | strict `3·most > 2·roster` supermajority |
//! | Receipt assembly | `domain::receipt` | Commit, then Done appended when crossed |
//!
//! ## Usage Example
//!
//! ```rust
//! use paracross_executor::adapters::{MemoryKv, NoopCoins};
//! use paracross_executor::ports::inbound::{ExecContext, TransactionExecutor};
//! use paracross_executor::{ParacrossConfig, ParacrossExecutor};
//! use paracross_types::{ParacrossAction, ParacrossCommitAction, ParacrossNodeStatus};
//!
//! let kv = MemoryKv::new();
//! let coins = NoopCoins;
//! let executor = ParacrossExecutor::new(ParacrossConfig::default());
//!
//! let ctx = ExecContext {
//!     kv: &kv,
//!     coins: &coins,
//!     tx_hash: vec![0; 32],
//!     from_addr: "validator-1".to_string(),
//!     block_time: 0,
//!     block_height: 1,
//!     exec_addr: "paracross".to_string(),
//! };
//! let action = ParacrossAction::Commit(ParacrossCommitAction {
//!     status: Some(ParacrossNodeStatus {
//!         title: "game".to_string(),
//!         height: 1,
//!         state_hash: "0xabc".to_string(),
//!     }),
//! });
//!
//! // No roster configured for "game": the commit is rejected and
//! // nothing is written.
//! assert!(executor.exec(&ctx, &action).is_err());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod state;

pub use error::{ParacrossError, ParacrossResult};
pub use ports::inbound::{ExecContext, ParacrossQuery, TransactionExecutor};
pub use ports::outbound::{CoinsAccess, KvStore};
pub use service::{DuplicateVotePolicy, ParacrossConfig, ParacrossExecutor, QueryService};
