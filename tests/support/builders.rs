// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use blog_core::domain::article::{Article, ArticleId, ArticleStatus};
use blog_core::domain::user::UserId;

pub struct ArticleBuilder {
    id: Option<String>,
    title: String,
    description: String,
    content: String,
    status: ArticleStatus,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: "Test Article".into(),
            description: "A short description".into(),
            content: "Test content".into(),
            status: ArticleStatus::Draft,
            user_id: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(self) -> Self {
        self.status(ArticleStatus::Published)
    }

    pub fn owned_by(mut self, user_id: UserId) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: self.id.map_or_else(ArticleId::generate, ArticleId::from),
            title: self.title,
            description: self.description,
            content: self.content,
            status: self.status,
            user_id: UserId(self.user_id),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
