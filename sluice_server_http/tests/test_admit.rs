use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use sluice_core::{Batch, BatchStore, IngestGateway, Item, ItemStore, StoreError};
use sluice_server_http::IngestServer;
use tower::ServiceExt;

/// Store double whose every operation fails, driving the gateway past its
/// retry budget.
struct BrokenStore;

#[async_trait]
impl ItemStore for BrokenStore {
    async fn add(&self, _item: Item) -> Result<(), StoreError> {
        Err(StoreError::Internal {
            message: "store offline".to_string(),
        })
    }

    async fn take(&self) -> Result<Batch, StoreError> {
        Err(StoreError::Internal {
            message: "store offline".to_string(),
        })
    }
}

fn post_item(payload: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/items")
        .body(Body::from(payload))
        .expect("build request")
}

#[tokio::test]
async fn admitted_item_returns_accepted() {
    let store = Arc::new(BatchStore::new(4));
    let router = IngestServer::new(IngestGateway::new(store.clone())).into_router();

    let response = router.oneshot(post_item("payload")).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let parsed: serde_json::Value = serde_json::from_slice(&body).expect("parse body");
    assert_eq!(parsed["status"], "accepted");

    assert_eq!(
        store.snapshot().await,
        vec![vec![Item::new("payload".as_bytes().to_vec())]],
    );
}

#[tokio::test]
async fn failed_admission_returns_server_error() {
    let router = IngestServer::new(IngestGateway::new(Arc::new(BrokenStore))).into_router();

    let response = router.oneshot(post_item("payload")).await.expect("request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let parsed: serde_json::Value = serde_json::from_slice(&body).expect("parse body");
    assert!(
        parsed["message"]
            .as_str()
            .expect("message field")
            .contains("admission failed")
    );
}
