//! In-memory KV capability for tests and embedding.

use crate::error::ParacrossResult;
use crate::ports::outbound::{CoinsAccess, KvStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory implementation of [`KvStore`].
#[derive(Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys ever written. Handy for asserting that a rejection
    /// path wrote nothing.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the full map, for replay-determinism assertions.
    pub fn dump(&self) -> HashMap<Vec<u8>, Vec<u8>> {
        self.entries.read().clone()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &[u8]) -> ParacrossResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> ParacrossResult<()> {
        self.entries.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

/// A coins capability that accepts every transfer. The commit path never
/// calls it; tests carry it in the context.
#[derive(Default)]
pub struct NoopCoins;

impl CoinsAccess for NoopCoins {
    fn transfer(&self, _from: &str, _to: &str, _amount: i64) -> ParacrossResult<()> {
        Ok(())
    }
}
