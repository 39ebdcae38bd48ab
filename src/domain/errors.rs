// src/domain/errors.rs
use crate::domain::article::ArticleStatus;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid status: cannot {action} an article that is {current}")]
    InvalidStatus {
        current: ArticleStatus,
        action: &'static str,
    },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
