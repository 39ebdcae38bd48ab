// src/infrastructure/repositories/rows.rs
//! Row shapes and query fragments shared by the SQLite and PostgreSQL
//! repositories. Binds go through `QueryBuilder`, which emits the right
//! placeholder syntax for each backend.

use crate::domain::article::{Article, ArticleFilter, ArticleId, ArticleStatus};
use crate::domain::errors::DomainError;
use crate::domain::user::{User, UserFilter, UserId};
use chrono::{DateTime, Utc};
use sqlx::{Database, Encode, FromRow, QueryBuilder, Type};

pub(super) const ARTICLE_COLUMNS: &str =
    "id, title, description, content, status, user_id, created_at, updated_at";

pub(super) const USER_COLUMNS: &str = "id, first_name, last_name";

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    id: String,
    title: String,
    description: String,
    content: String,
    status: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::from(row.id),
            title: row.title,
            description: row.description,
            content: row.content,
            status: row.status.parse::<ArticleStatus>()?,
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct UserRow {
    pub(super) id: i64,
    first_name: String,
    last_name: String,
}

impl UserRow {
    pub(super) fn into_user(self, articles: Vec<Article>) -> User {
        User::new(UserId(self.id), self.first_name, self.last_name).with_articles(articles)
    }
}

pub(super) fn push_article_conditions<'args, DB>(
    builder: &mut QueryBuilder<'args, DB>,
    filter: &ArticleFilter,
) where
    DB: Database,
    String: Encode<'args, DB> + Type<DB>,
    i64: Encode<'args, DB> + Type<DB>,
{
    let mut has_where = false;
    if let Some(status) = filter.status {
        builder.push(" WHERE status = ");
        builder.push_bind(status.as_str().to_owned());
        has_where = true;
    }

    if let Some(user_id) = filter.user_id {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("user_id = ");
        builder.push_bind(i64::from(user_id));
    }
}

pub(super) fn push_user_conditions<'args, DB>(
    builder: &mut QueryBuilder<'args, DB>,
    filter: &UserFilter,
) where
    DB: Database,
    String: Encode<'args, DB> + Type<DB>,
{
    if let Some(last_name) = &filter.last_name {
        builder.push(" WHERE last_name = ");
        builder.push_bind(last_name.clone());
    }
}

pub(super) fn push_limit<'args, DB>(builder: &mut QueryBuilder<'args, DB>, limit: Option<u32>)
where
    DB: Database,
    i64: Encode<'args, DB> + Type<DB>,
{
    if let Some(limit) = limit {
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Postgres, Sqlite};

    fn full_filter() -> ArticleFilter {
        ArticleFilter {
            status: Some(ArticleStatus::Published),
            user_id: Some(UserId(7)),
            limit: Some(5),
        }
    }

    #[test]
    fn article_conditions_use_each_backend_placeholders() {
        let filter = full_filter();

        let mut sqlite: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT 1 FROM articles");
        push_article_conditions(&mut sqlite, &filter);
        push_limit(&mut sqlite, filter.limit);
        assert_eq!(
            sqlite.sql(),
            "SELECT 1 FROM articles WHERE status = ? AND user_id = ? LIMIT ?"
        );

        let mut postgres: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM articles");
        push_article_conditions(&mut postgres, &filter);
        push_limit(&mut postgres, filter.limit);
        assert_eq!(
            postgres.sql(),
            "SELECT 1 FROM articles WHERE status = $1 AND user_id = $2 LIMIT $3"
        );
    }

    #[test]
    fn owner_only_filter_starts_the_where_clause() {
        let filter = ArticleFilter {
            user_id: Some(UserId(3)),
            ..ArticleFilter::default()
        };
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT 1 FROM articles");
        push_article_conditions(&mut builder, &filter);
        assert_eq!(builder.sql(), "SELECT 1 FROM articles WHERE user_id = ?");
    }

    #[test]
    fn empty_filters_add_nothing() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM users");
        push_user_conditions(&mut builder, &UserFilter::default());
        push_limit(&mut builder, None);
        assert_eq!(builder.sql(), "SELECT 1 FROM users");
    }
}
