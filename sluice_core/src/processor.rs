//! Downstream processor contract.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::ProcessError,
    types::{Batch, Limits},
};

/// External collaborator that consumes batches.
///
/// `process` must tolerate being called repeatedly with the same batch: the
/// flusher resends the identical batch on retry, which is why the batch is
/// passed by shared borrow.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Reports the batch capacity and flush interval.
    ///
    /// Queried exactly once at startup; a failure here prevents the pipeline
    /// from starting.
    async fn limits(&self) -> Result<Limits, ProcessError>;

    /// Consumes one batch.
    async fn process(&self, batch: &Batch) -> Result<(), ProcessError>;
}

/// Processor stub that accepts every batch.
#[derive(Debug, Clone)]
pub struct NoopProcessor {
    limits: Limits,
}

impl NoopProcessor {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }
}

impl Default for NoopProcessor {
    fn default() -> Self {
        Self::new(Limits {
            batch_size: 10,
            flush_interval: Duration::from_secs(10),
        })
    }
}

#[async_trait]
impl Processor for NoopProcessor {
    async fn limits(&self) -> Result<Limits, ProcessError> {
        Ok(self.limits)
    }

    async fn process(&self, batch: &Batch) -> Result<(), ProcessError> {
        debug!(num_items = batch.len(), "processed batch");
        Ok(())
    }
}
