use thiserror::Error;

/// Error for calls to the external record store.
///
/// Every call is attempted once; none of these are retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store request timed out after {0} ms")]
    Timeout(u64),

    #[error("Store request failed: {0}")]
    Transport(String),

    #[error("Store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse store response: {0}")]
    Decode(String),
}
