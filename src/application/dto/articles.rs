use crate::domain::article::{Article, ArticleId, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub status: ArticleStatus,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            description: article.description,
            content: article.content,
            status: article.status,
            user_id: article.user_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleIdDto {
    pub id: String,
}

impl From<ArticleId> for ArticleIdDto {
    fn from(id: ArticleId) -> Self {
        Self { id: id.into() }
    }
}
