// src/application/error.rs
use crate::domain::{article::ArticleId, errors::DomainError, user::UserId};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("article not found: {0}")]
    ArticleNotFound(ArticleId),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ArticleNotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }

    pub fn is_invalid_status(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidStatus { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleStatus;

    #[test]
    fn not_found_covers_both_entities() {
        assert!(ApplicationError::UserNotFound(UserId(7)).is_not_found());
        assert!(ApplicationError::ArticleNotFound(ArticleId::from("a")).is_not_found());
        assert!(!ApplicationError::permission_denied("nope").is_not_found());
    }

    #[test]
    fn invalid_status_is_recognised_through_the_domain_variant() {
        let err: ApplicationError = DomainError::InvalidStatus {
            current: ArticleStatus::Draft,
            action: "archive",
        }
        .into();
        assert!(err.is_invalid_status());
        assert_eq!(
            err.to_string(),
            "invalid status: cannot archive an article that is draft"
        );
    }
}
