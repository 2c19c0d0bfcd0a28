//! Adapters: in-memory implementations of the outbound ports.

pub mod memory_kv;

pub use memory_kv::{MemoryKv, NoopCoins};
