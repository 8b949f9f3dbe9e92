use thiserror::Error;

/// Error type for session token operations.
///
/// Verification failures keep their cause so it can be logged, but callers
/// facing a client should treat every verification variant the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
