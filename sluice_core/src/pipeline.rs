//! Wiring of the gateway and flusher around a freshly built store.

use std::{fmt, sync::Arc};

use crate::{
    error::{FaultSnafu, ProcessError},
    flusher::{Flusher, RetryPolicy},
    gateway::IngestGateway,
    processor::Processor,
    store::BatchStore,
    types::Limits,
};

/// A connected ingest pipeline.
///
/// Construction is explicit: the caller receives both the gateway and the
/// flusher and decides when and where the background task runs, typically via
/// [`run_background_flusher`](crate::flusher::run_background_flusher).
pub struct IngestPipeline {
    pub gateway: IngestGateway,
    pub flusher: Flusher,
    pub limits: Limits,
}

impl fmt::Debug for IngestPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestPipeline")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl IngestPipeline {
    /// Queries the processor limits once and builds the store, gateway, and
    /// flusher with the default retry policy.
    ///
    /// Failure to obtain the limits is the only unrecoverable condition in
    /// the pipeline; nothing is started in that case.
    pub async fn connect(processor: Arc<dyn Processor>) -> Result<Self, ProcessError> {
        let limits = processor.limits().await?;
        let policy = RetryPolicy::from_interval(limits.flush_interval);
        Self::with_policy(processor, limits, policy)
    }

    /// Builds the pipeline with an explicit retry policy.
    pub fn with_policy(
        processor: Arc<dyn Processor>,
        limits: Limits,
        policy: RetryPolicy,
    ) -> Result<Self, ProcessError> {
        if limits.batch_size == 0 {
            return FaultSnafu {
                message: "processor reported a zero batch size",
            }
            .fail();
        }

        if limits.flush_interval.is_zero() {
            return FaultSnafu {
                message: "processor reported a zero flush interval",
            }
            .fail();
        }

        let store: Arc<BatchStore> = BatchStore::new(limits.batch_size).into();
        let gateway = IngestGateway::new(store.clone());
        let flusher = Flusher::new(store, processor, limits.flush_interval, policy);

        Ok(Self {
            gateway,
            flusher,
            limits,
        })
    }
}
