use std::net::AddrParseError;

use snafu::Snafu;
use sluice_core::ProcessError;

/// CLI error types.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CliError {
    #[snafu(display("Invalid server URL"))]
    InvalidServerUrl { source: AddrParseError },
    #[snafu(display("IO error"))]
    Io { source: std::io::Error },
    #[snafu(display("Failed to query processor limits"))]
    Processor { source: ProcessError },
    #[snafu(display("Push client error"))]
    PushClient {
        source: sluice_client::HttpAdmitClientError,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
