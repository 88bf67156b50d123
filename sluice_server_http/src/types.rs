//! Request and response types for the item admission endpoint.

use serde::{Deserialize, Serialize};

/// Response payload for an admitted item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmitResponse {
    /// Always `"accepted"`.
    pub status: String,
}

impl AdmitResponse {
    pub fn accepted() -> Self {
        Self {
            status: "accepted".to_string(),
        }
    }
}

/// Error payload returned to producers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
