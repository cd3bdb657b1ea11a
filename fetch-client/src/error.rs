//! Error types for the fetch client

use thiserror::Error;

/// Errors that can occur while fetching a remote document
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or HTTP transport error
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived with a status code other than the expected one
    #[error("received status {actual}, expected status {expected}")]
    UnexpectedStatus {
        /// Status code the caller required
        expected: u16,
        /// Status code the server actually returned
        actual: u16,
    },
}
