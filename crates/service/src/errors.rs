use thiserror::Error;

use crate::store::StoreError;

/// Failure taxonomy shared by every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Unauthorized => 1004,
            ServiceError::Store(_) => 1200,
            ServiceError::Internal(_) => 1300,
        }
    }
}
