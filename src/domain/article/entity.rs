// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Fields supplied by the author when drafting an article.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub user_id: UserId,
}

/// An article and its lifecycle.
///
/// Status moves along `draft -> published -> archived` or `draft -> deleted`
/// and never backwards. Two articles are equal when their ids are equal,
/// whatever the other fields hold.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub status: ArticleStatus,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn draft(new: NewArticle, now: DateTime<Utc>) -> Self {
        let NewArticle {
            title,
            description,
            content,
            user_id,
        } = new;

        Self {
            id: ArticleId::generate(),
            title,
            description,
            content,
            status: ArticleStatus::Draft,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(ArticleStatus::Draft, ArticleStatus::Published, "publish", now)
    }

    pub fn delete(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(ArticleStatus::Draft, ArticleStatus::Deleted, "delete", now)
    }

    pub fn archive(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.transition(ArticleStatus::Published, ArticleStatus::Archived, "archive", now)
    }

    fn transition(
        &mut self,
        from: ArticleStatus,
        to: ArticleStatus,
        action: &'static str,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status != from {
            return Err(DomainError::InvalidStatus {
                current: self.status,
                action,
            });
        }
        self.status = to;
        self.updated_at = now;
        Ok(())
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// Lets a user's article set be searched by id alone.
impl Borrow<ArticleId> for Article {
    fn borrow(&self) -> &ArticleId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_article() -> Article {
        Article::draft(
            NewArticle {
                title: "Learning Rust".into(),
                description: "Tips and tricks working with Rust".into(),
                content: "content".into(),
                user_id: UserId(1),
            },
            Utc::now(),
        )
    }

    fn with_status(status: ArticleStatus) -> Article {
        let mut article = sample_article();
        article.status = status;
        article
    }

    #[test]
    fn new_article_is_draft() {
        let article = sample_article();
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.created_at, article.updated_at);
    }

    #[test]
    fn publish_moves_draft_to_published() {
        let mut article = sample_article();
        let later = article.updated_at + Duration::seconds(5);
        article.publish(later).unwrap();
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn publishing_twice_fails_the_second_time() {
        let mut article = sample_article();
        article.publish(Utc::now()).unwrap();
        let err = article.publish(Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidStatus {
                current: ArticleStatus::Published,
                action: "publish"
            }
        ));
        assert_eq!(article.status, ArticleStatus::Published);
    }

    #[test]
    fn delete_moves_draft_to_deleted() {
        let mut article = sample_article();
        article.delete(Utc::now()).unwrap();
        assert_eq!(article.status, ArticleStatus::Deleted);
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let mut article = sample_article();
        article.delete(Utc::now()).unwrap();
        assert!(matches!(
            article.delete(Utc::now()),
            Err(DomainError::InvalidStatus { .. })
        ));
    }

    #[test]
    fn deleting_a_published_article_fails() {
        let mut article = with_status(ArticleStatus::Published);
        assert!(article.delete(Utc::now()).is_err());
        assert_eq!(article.status, ArticleStatus::Published);
    }

    #[test]
    fn archive_moves_published_to_archived() {
        let mut article = with_status(ArticleStatus::Published);
        article.archive(Utc::now()).unwrap();
        assert_eq!(article.status, ArticleStatus::Archived);
    }

    #[test]
    fn archiving_a_draft_fails_and_leaves_it_untouched() {
        let mut article = sample_article();
        let before = article.updated_at;
        let err = article.archive(before + Duration::seconds(1)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidStatus {
                current: ArticleStatus::Draft,
                action: "archive"
            }
        ));
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.updated_at, before);
    }

    #[test]
    fn terminal_states_accept_no_transition() {
        for status in [ArticleStatus::Archived, ArticleStatus::Deleted] {
            let mut article = with_status(status);
            assert!(article.publish(Utc::now()).is_err());
            assert!(article.delete(Utc::now()).is_err());
            assert!(article.archive(Utc::now()).is_err());
            assert_eq!(article.status, status);
        }
    }

    #[test]
    fn equality_only_considers_the_id() {
        let article = sample_article();
        let mut other = article.clone();
        other.title = "Something else".into();
        other.status = ArticleStatus::Published;
        assert_eq!(article, other);
        assert_ne!(article, sample_article());
    }

    #[test]
    fn ownership_is_checked_against_the_user_id() {
        let article = sample_article();
        assert!(article.is_owned_by(UserId(1)));
        assert!(!article.is_owned_by(UserId(2)));
    }
}
