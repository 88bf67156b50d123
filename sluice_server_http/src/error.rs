use thiserror::Error;

/// Errors that can occur in the HTTP ingest server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("internal server error: {0}")]
    Internal(String),
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;
