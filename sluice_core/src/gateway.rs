//! Entry point producers use to admit items.

use std::sync::Arc;

use tracing::warn;

use crate::{
    error::{AdmissionFailedSnafu, GatewayError},
    store::ItemStore,
    types::Item,
};

/// Admits one item at a time into the batch store.
///
/// Cheap to clone; every transport handler can hold its own copy. Admission
/// never blocks on the flusher since the store has no upper bound on the
/// number of pending batches.
#[derive(Clone)]
pub struct IngestGateway {
    store: Arc<dyn ItemStore>,
}

impl IngestGateway {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Admits one item, retrying a transient store fault once.
    ///
    /// Returns [`GatewayError::AdmissionFailed`] when the retry fails too;
    /// the transport maps it to a server error response.
    pub async fn admit(&self, item: Item) -> Result<(), GatewayError> {
        let Err(err) = self.store.add(item.clone()).await else {
            return Ok(());
        };

        warn!(err = ?err, "failed to admit item, retrying");

        if let Err(err) = self.store.add(item).await {
            warn!(err = ?err, "failed to admit item after retry");
            return AdmissionFailedSnafu {
                message: err.to_string(),
            }
            .fail();
        }

        Ok(())
    }
}
