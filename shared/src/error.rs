//! Error types for query construction and listing fetches.

use thiserror::Error;

/// Why a listing fetch produced no committable result.
///
/// Every variant is recoverable: the previous list state is kept and the
/// view stays interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// The body did not match the expected listing shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Rejected query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Pages are numbered from 1.
    #[error("page must be >= 1")]
    ZeroPage,
    /// API base URL cannot carry a path.
    #[error("invalid API base: {0}")]
    InvalidBase(String),
}
