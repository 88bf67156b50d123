//! Handler for the item admission endpoint.

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, http::StatusCode, response::Json};
use sluice_core::Item;

use crate::IngestServerState;
use crate::error::ServerError;
use crate::types::{AdmitResponse, ErrorResponse};

/// Handler for the /v1/items endpoint.
///
/// The request body is the opaque item payload; the server never inspects it.
pub async fn admit_handler(
    State(state): State<IngestServerState>,
    body: Bytes,
) -> impl IntoResponse {
    match state.gateway.admit(Item::new(body)).await {
        Ok(()) => Json(AdmitResponse::accepted()).into_response(),
        Err(err) => map_error_to_response(ServerError::Internal(err.to_string())),
    }
}

fn map_error_to_response(error: ServerError) -> Response {
    let status_code = match error {
        ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let response = Json(ErrorResponse {
        message: error.to_string(),
    });

    (status_code, response).into_response()
}
