//! HTTP ingest server.
//!
//! This crate provides a server to admit items over HTTP.
//!
//! The server is built using axum and provides
//! a `/v1/items` endpoint for item admission.

pub mod admit;
pub mod error;
pub mod types;

// Re-export the main types for easier importing
pub use error::{Result, ServerError};
pub use types::{AdmitResponse, ErrorResponse};

use axum::{Router, routing::post};
use sluice_core::IngestGateway;

use crate::admit::admit_handler;

/// HTTP ingest server that receives items via HTTP POST requests.
pub struct IngestServer {
    state: IngestServerState,
}

#[derive(Clone)]
pub struct IngestServerState {
    pub(crate) gateway: IngestGateway,
}

impl IngestServer {
    /// Create a new ingest server around the given gateway.
    pub fn new(gateway: IngestGateway) -> Self {
        let state = IngestServerState { gateway };

        Self { state }
    }

    pub fn into_router(self) -> Router {
        Router::new()
            .route("/v1/items", post(admit_handler))
            .with_state(self.state)
    }
}
