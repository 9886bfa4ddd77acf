//! Service error types

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a service call: either the engine refused, or storage failed
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Returns the underlying error code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Query(e) => e.code(),
            ServiceError::Store(e) => e.code(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Query(QueryError::NotFound(_)))
    }
}
