use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod snippets;
pub mod tags;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure taxonomy shared by all service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("{0}")]
    Form(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            err => ServiceError::Repository(err),
        }
    }
}
