//! HTTP client for pushing items to a sluice server.

use reqwest::StatusCode;
use snafu::{ResultExt, Snafu};
use sluice_server_http::{AdmitResponse, ErrorResponse};

/// A client for admitting items over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAdmitClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Snafu)]
pub enum HttpAdmitClientError {
    #[snafu(display("Request error"))]
    Request { source: reqwest::Error },
    #[snafu(display("Response error: status={status}, message={message}"))]
    Response { status: StatusCode, message: String },
}

pub type Result<T, E = HttpAdmitClientError> = std::result::Result<T, E>;

impl HttpAdmitClient {
    /// Create a new HTTP admit client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Sends one opaque item payload to the server.
    pub async fn admit(&self, payload: impl Into<Vec<u8>>) -> Result<AdmitResponse> {
        let url = format!("{}/v1/items", self.base_url);

        let response = self
            .client
            .post(&url)
            .body(payload.into())
            .send()
            .await
            .context(RequestSnafu {})?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<AdmitResponse>()
                .await
                .context(RequestSnafu {});
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => "unknown error".to_string(),
        };

        ResponseSnafu { status, message }.fail()
    }
}
