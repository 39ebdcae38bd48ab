// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use super::rows::{ARTICLE_COLUMNS, ArticleRow, push_article_conditions, push_limit};
use crate::domain::article::{Article, ArticleFilter, ArticleId, ArticleQuery, ArticleRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::session::Session;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

#[derive(Clone)]
pub struct SqliteArticleRepository {
    session: Session<Sqlite>,
}

impl SqliteArticleRepository {
    pub const fn new(session: Session<Sqlite>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn add(&self, article: Article) -> DomainResult<Article> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        sqlx::query(
            "INSERT INTO articles (id, title, description, content, status, user_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(article.id.as_str())
        .bind(article.title.as_str())
        .bind(article.description.as_str())
        .bind(article.content.as_str())
        .bind(article.status.as_str())
        .bind(i64::from(article.user_id))
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        Ok(article)
    }

    async fn get(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn save(&self, article: &Article) -> DomainResult<()> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let result = sqlx::query("UPDATE articles SET status = ?, updated_at = ? WHERE id = ?")
            .bind(article.status.as_str())
            .bind(article.updated_at)
            .bind(article.id.as_str())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {}", article.id)));
        }
        Ok(())
    }

    fn get_all(&self) -> ArticleQuery<'_> {
        ArticleQuery::new(self)
    }

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM articles");
        push_article_conditions(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_matching(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        push_article_conditions(&mut builder, filter);
        builder.push(" ORDER BY created_at, id");
        push_limit(&mut builder, filter.limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
