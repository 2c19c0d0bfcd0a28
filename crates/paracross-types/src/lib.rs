//! # Paracross Shared Types
//!
//! Domain entities, receipt taxonomy, and the canonical byte codec shared
//! by the paracross executor and its read-only front door.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every entity persisted under a paracross
//!   key or embedded in a receipt log is defined here, once.
//! - **Pinned Encoding**: `codec::encode`/`codec::decode` produce the
//!   canonical byte form of every persisted entity. Host chains carry this
//!   data forever; changing the encoding is a migration, not a refactor.
//! - **Value Objects**: receipts never touch storage. They describe the
//!   mutations and logs of one transaction and are applied atomically by
//!   the host.

pub mod codec;
pub mod entities;
pub mod receipts;

pub use codec::{decode, encode, CodecError};
pub use entities::{
    Address, CommitStatus, ConfigArray, ConfigItem, ParacrossAction, ParacrossCommitAction,
    ParacrossHeightStatus, ParacrossNodeStatus, ParacrossStatus, ParacrossStatusDetails, StateHash,
};
pub use receipts::{
    CommitLog, DoneLog, ExecTy, KeyValue, LogKind, Receipt, ReceiptLog, RecordLog,
};
