//! FIFO store of fixed-capacity batches.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::StoreError,
    types::{Batch, Item},
};

/// Storage abstraction the gateway and the flusher program against.
///
/// The production implementation is [`BatchStore`]; tests substitute doubles
/// that inject transient faults.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Inserts an item into the tail batch, growing the store as needed.
    async fn add(&self, item: Item) -> Result<(), StoreError>;
    /// Removes and returns the oldest batch.
    async fn take(&self) -> Result<Batch, StoreError>;
}

/// FIFO sequence of bounded batches.
///
/// Only the tail batch accepts new items; a fresh tail is created when the
/// store is empty or the tail already holds `batch_size` items. Every
/// non-tail batch holds exactly `batch_size` items. There is no bound on the
/// number of batches, so `add` never rejects an item under correct use.
///
/// The whole decide-and-mutate sequence of each operation runs under one
/// exclusive lock, so concurrent callers cannot observe torn state.
#[derive(Debug)]
pub struct BatchStore {
    batches: RwLock<VecDeque<Batch>>,
    batch_size: usize,
}

impl BatchStore {
    /// Creates a store that seals batches at `batch_size` items.
    pub fn new(batch_size: usize) -> Self {
        debug_assert!(batch_size > 0, "batch size must be nonzero");
        Self {
            batches: RwLock::new(VecDeque::new()),
            batch_size,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches currently held, the partially filled tail included.
    pub async fn len(&self) -> usize {
        self.batches.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.batches.read().await.is_empty()
    }

    /// Copies out the current contents, oldest batch first.
    pub async fn snapshot(&self) -> Vec<Batch> {
        self.batches.read().await.iter().cloned().collect()
    }
}

#[async_trait]
impl ItemStore for BatchStore {
    async fn add(&self, item: Item) -> Result<(), StoreError> {
        let mut batches = self.batches.write().await;
        match batches.back_mut() {
            Some(tail) if tail.len() < self.batch_size => tail.push(item),
            _ => batches.push_back(vec![item]),
        }
        Ok(())
    }

    async fn take(&self) -> Result<Batch, StoreError> {
        let mut batches = self.batches.write().await;
        batches.pop_front().ok_or(StoreError::Empty)
    }
}
