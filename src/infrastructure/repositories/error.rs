// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const CNT_ARTICLE_PKEY: &str = "articles_pkey";
const CNT_ARTICLE_USER: &str = "articles_user_id_fkey";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";

/// Translate a sqlx failure into the domain taxonomy.
///
/// PostgreSQL reports constraint names, which give the most precise message;
/// SQLite does not, so the portable error kind is the fallback.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_ARTICLE_PKEY => {
                        return DomainError::Conflict("article id already exists".into());
                    }
                    CNT_ARTICLE_USER => {
                        return DomainError::NotFound("article owner not found".into());
                    }
                    CNT_ARTICLE_STATUS_CHECK => {
                        return DomainError::Validation("unknown article status".into());
                    }
                    _ => {}
                }
            }

            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DomainError::Validation(db_err.message().to_string())
                }
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn pool_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
