use thiserror::Error;

use crate::domain::errors::StoreError;

/// Error for catalog operations.
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
