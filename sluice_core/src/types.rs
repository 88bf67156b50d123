//! Types shared across the ingest pipeline.

use std::time::Duration;

use bytes::Bytes;

/// An opaque unit of work admitted by producers.
///
/// The pipeline never inspects the payload; it only moves it around in
/// batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item(Bytes);

/// An ordered group of items, the unit handed to the processor.
pub type Batch = Vec<Item>;

/// Batch capacity and flush interval, obtained from the processor at
/// startup and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of items per batch.
    pub batch_size: usize,
    /// Time between flush cycles.
    pub flush_interval: Duration,
}

impl Item {
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self(payload.into())
    }

    pub fn payload(&self) -> &Bytes {
        &self.0
    }
}

impl From<Bytes> for Item {
    fn from(payload: Bytes) -> Self {
        Self(payload)
    }
}

impl From<Vec<u8>> for Item {
    fn from(payload: Vec<u8>) -> Self {
        Self(payload.into())
    }
}
