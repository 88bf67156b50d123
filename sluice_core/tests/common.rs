#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use sluice_core::{
    Batch, BatchStore, Item, ItemStore, Limits, ProcessError, Processor, StoreError,
};
use tokio::time::Instant;

pub fn item(tag: &str) -> Item {
    Item::new(tag.as_bytes().to_vec())
}

/// Store double that delegates to a real [`BatchStore`] but fails the next
/// `n` adds or takes with a transient fault.
pub struct FaultInjectingStore {
    inner: BatchStore,
    failing_adds: AtomicU32,
    failing_takes: AtomicU32,
    add_attempts: AtomicU32,
    take_attempts: AtomicU32,
}

impl FaultInjectingStore {
    pub fn new(batch_size: usize) -> Self {
        Self {
            inner: BatchStore::new(batch_size),
            failing_adds: AtomicU32::new(0),
            failing_takes: AtomicU32::new(0),
            add_attempts: AtomicU32::new(0),
            take_attempts: AtomicU32::new(0),
        }
    }

    pub fn fail_next_adds(&self, n: u32) {
        self.failing_adds.store(n, Ordering::SeqCst);
    }

    pub fn fail_next_takes(&self, n: u32) {
        self.failing_takes.store(n, Ordering::SeqCst);
    }

    pub fn add_attempts(&self) -> u32 {
        self.add_attempts.load(Ordering::SeqCst)
    }

    pub fn take_attempts(&self) -> u32 {
        self.take_attempts.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &BatchStore {
        &self.inner
    }

    pub async fn seed(&self, tags: &[&str]) {
        for tag in tags {
            self.inner.add(item(tag)).await.expect("seed item");
        }
    }
}

fn consume_budget(budget: &AtomicU32) -> bool {
    budget
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[async_trait]
impl ItemStore for FaultInjectingStore {
    async fn add(&self, item: Item) -> Result<(), StoreError> {
        self.add_attempts.fetch_add(1, Ordering::SeqCst);
        if consume_budget(&self.failing_adds) {
            return Err(StoreError::Internal {
                message: "injected add fault".to_string(),
            });
        }
        self.inner.add(item).await
    }

    async fn take(&self) -> Result<Batch, StoreError> {
        self.take_attempts.fetch_add(1, Ordering::SeqCst);
        if consume_budget(&self.failing_takes) {
            return Err(StoreError::Internal {
                message: "injected take fault".to_string(),
            });
        }
        self.inner.take().await
    }
}

/// Scripted outcome for one `process` call.
#[derive(Debug, Clone, Copy)]
pub enum ProcessOutcome {
    Accept,
    Blocked,
    Fault,
    /// Never completes on its own; only a caller-side deadline ends the call.
    Hang,
}

/// Processor double that records every call with its instant and batch.
///
/// Calls beyond the script are accepted.
pub struct RecordingProcessor {
    limits: Limits,
    limits_calls: AtomicU32,
    script: Mutex<VecDeque<ProcessOutcome>>,
    calls: Mutex<Vec<(Instant, Batch)>>,
}

impl RecordingProcessor {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            limits_calls: AtomicU32::new(0),
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn script(&self, outcomes: impl IntoIterator<Item = ProcessOutcome>) {
        self.script.lock().unwrap().extend(outcomes);
    }

    pub fn calls(&self) -> Vec<(Instant, Batch)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn limits_calls(&self) -> u32 {
        self.limits_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Processor for RecordingProcessor {
    async fn limits(&self) -> Result<Limits, ProcessError> {
        self.limits_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.limits)
    }

    async fn process(&self, batch: &Batch) -> Result<(), ProcessError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), batch.clone()));

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ProcessOutcome::Accept);

        match outcome {
            ProcessOutcome::Accept => Ok(()),
            ProcessOutcome::Blocked => Err(ProcessError::Blocked),
            ProcessOutcome::Fault => Err(ProcessError::Fault {
                message: "scripted fault".to_string(),
            }),
            ProcessOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(86400)).await;
                Ok(())
            }
        }
    }
}
