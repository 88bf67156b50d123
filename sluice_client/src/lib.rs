pub mod http;

pub use http::{HttpAdmitClient, HttpAdmitClientError, Result};
