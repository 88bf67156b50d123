use snafu::Snafu;

/// Batch store error types.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum StoreError {
    /// The store holds no batches.
    ///
    /// This is an expected condition between flush cycles, not a fault.
    #[snafu(display("empty store"))]
    Empty,
    /// Unexpected internal fault. Callers treat it as transient and retry.
    #[snafu(display("internal store error: {message}"))]
    Internal { message: String },
}

/// Processor error types.
///
/// The outcome of a processor call is tagged so that retry branches are
/// exhaustive instead of comparing opaque error values.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum ProcessError {
    /// The processor is overloaded and wants callers to back off briefly
    /// before retrying.
    #[snafu(display("processor blocked"))]
    Blocked,
    /// Any other processor failure.
    #[snafu(display("processor fault: {message}"))]
    Fault { message: String },
}

/// Errors the gateway surfaces to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum GatewayError {
    /// The store rejected the item twice. The transport must map this to a
    /// server error response.
    #[snafu(display("admission failed: {message}"))]
    AdmissionFailed { message: String },
}

pub type Result<T, E = ProcessError> = std::result::Result<T, E>;
