//! Timer-driven flush loop with bounded retry.

use std::{sync::Arc, time::Duration};

use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    error::{FaultSnafu, ProcessError, StoreError},
    processor::Processor,
    store::ItemStore,
    types::Batch,
};

/// Retry budget and backoff for one flush cycle.
///
/// The defaults reproduce the reference policy: one extra store read after a
/// transient fault, one extra downstream call with its outcome discarded, and
/// a backoff of one tenth of the flush interval after a `Blocked` response.
/// This caps the worst-case cost of a cycle at two store reads and two
/// downstream calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Extra `take` attempts after a transient store fault. An empty store is
    /// never retried.
    pub store_retries: u32,
    /// Extra `process` attempts after a failed first delivery. Their outcome
    /// is not inspected.
    pub process_retries: u32,
    /// Pause before retrying after the processor reports `Blocked`.
    pub blocked_backoff: Duration,
    /// Deadline applied to each `process` call. An elapsed deadline counts as
    /// a generic processor fault. `None` lets a slow processor stall the loop.
    pub process_timeout: Option<Duration>,
}

impl RetryPolicy {
    pub fn from_interval(interval: Duration) -> Self {
        Self {
            store_retries: 1,
            process_retries: 1,
            blocked_backoff: interval / 10,
            process_timeout: None,
        }
    }
}

/// Periodically drains the oldest batch from the store into the processor.
///
/// A cycle that fails past its retry budget is abandoned: the failure is
/// logged and the loop waits for the next tick.
pub struct Flusher {
    store: Arc<dyn ItemStore>,
    processor: Arc<dyn Processor>,
    interval: Duration,
    policy: RetryPolicy,
}

/// Runs the flusher until the token is cancelled.
pub async fn run_background_flusher(flusher: Flusher, ct: CancellationToken) -> Result<(), ProcessError> {
    flusher.run(ct).await
}

impl Flusher {
    pub fn new(
        store: Arc<dyn ItemStore>,
        processor: Arc<dyn Processor>,
        interval: Duration,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            store,
            processor,
            interval,
            policy,
        }
    }

    /// Runs flush cycles every `interval` until the token is cancelled.
    pub async fn run(self, ct: CancellationToken) -> Result<(), ProcessError> {
        loop {
            tokio::select! {
                _ = ct.cancelled() => break,
                _ = sleep(self.interval) => {
                    self.flush_cycle(&ct).await;
                }
            }
        }

        Ok(())
    }

    async fn flush_cycle(&self, ct: &CancellationToken) {
        let Some(batch) = self.take_with_retry().await else {
            return;
        };

        self.deliver(&batch, ct).await;
    }

    async fn take_with_retry(&self) -> Option<Batch> {
        let mut attempts = 0;
        loop {
            match self.store.take().await {
                Ok(batch) => return Some(batch),
                Err(StoreError::Empty) => {
                    debug!("store is empty, nothing to flush");
                    return None;
                }
                Err(err) if attempts < self.policy.store_retries => {
                    attempts += 1;
                    warn!(err = ?err, "failed to take batch, retrying");
                }
                Err(err) => {
                    warn!(err = ?err, "store is unavailable, abandoning cycle");
                    return None;
                }
            }
        }
    }

    async fn deliver(&self, batch: &Batch, ct: &CancellationToken) {
        match self.process_once(batch).await {
            Ok(()) => return,
            Err(ProcessError::Blocked) => {
                warn!("processor is blocked, backing off before retry");
                tokio::select! {
                    _ = ct.cancelled() => return,
                    _ = sleep(self.policy.blocked_backoff) => {}
                }
            }
            Err(err) => {
                warn!(err = ?err, "processor failed, retrying");
            }
        }

        // The remaining attempts resend the identical batch and their outcome
        // is not inspected.
        for _ in 0..self.policy.process_retries {
            let _ = self.process_once(batch).await;
        }
    }

    async fn process_once(&self, batch: &Batch) -> Result<(), ProcessError> {
        let Some(deadline) = self.policy.process_timeout else {
            return self.processor.process(batch).await;
        };

        match timeout(deadline, self.processor.process(batch)).await {
            Ok(result) => result,
            Err(_) => FaultSnafu {
                message: "processor call exceeded deadline",
            }
            .fail(),
        }
    }
}
