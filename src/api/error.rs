use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single remote call. One variant per failure site: the
/// request never left, the service said no, or a success body didn't parse.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the note service.
    #[error("{operation}: could not reach the note service: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("{operation}: note service returned {status}: {message}")]
    Remote {
        operation: &'static str,
        status: StatusCode,
        message: String,
    },
    /// The service answered 2xx but the body did not decode.
    #[error("{operation}: could not decode note service response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Name of the remote operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiError::Network { operation, .. }
            | ApiError::Remote { operation, .. }
            | ApiError::Decode { operation, .. } => operation,
        }
    }
}
