use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
