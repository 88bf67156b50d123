//! Core batching pipeline.
//!
//! Producers admit opaque items through the [`IngestGateway`]; items
//! accumulate in the [`BatchStore`] as fixed-capacity batches; the
//! [`Flusher`] periodically drains the oldest batch to a [`Processor`],
//! applying a bounded retry policy.

pub mod error;
pub mod flusher;
pub mod gateway;
pub mod pipeline;
pub mod processor;
pub mod store;
pub mod types;

pub use error::{GatewayError, ProcessError, StoreError};
pub use flusher::{Flusher, RetryPolicy, run_background_flusher};
pub use gateway::IngestGateway;
pub use pipeline::IngestPipeline;
pub use processor::{NoopProcessor, Processor};
pub use store::{BatchStore, ItemStore};
pub use types::{Batch, Item, Limits};
