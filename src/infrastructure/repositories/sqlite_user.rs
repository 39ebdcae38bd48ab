// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use super::rows::{
    ARTICLE_COLUMNS, ArticleRow, USER_COLUMNS, UserRow, push_limit, push_user_conditions,
};
use crate::domain::article::Article;
use crate::domain::errors::DomainResult;
use crate::domain::user::{NewUser, User, UserFilter, UserId, UserQuery, UserRepository};
use crate::infrastructure::session::Session;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

#[derive(Clone)]
pub struct SqliteUserRepository {
    session: Session<Sqlite>,
}

impl SqliteUserRepository {
    pub const fn new(session: Session<Sqlite>) -> Self {
        Self { session }
    }
}

async fn load_articles(conn: &mut SqliteConnection, user_id: i64) -> DomainResult<Vec<Article>> {
    let rows = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE user_id = ? ORDER BY created_at, id"
    ))
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(map_sqlx)?;

    rows.into_iter().map(Article::try_from).collect()
}

async fn hydrate(conn: &mut SqliteConnection, row: UserRow) -> DomainResult<User> {
    let articles = load_articles(conn, row.id).await?;
    Ok(row.into_user(articles))
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn add(&self, new_user: NewUser) -> DomainResult<User> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (first_name, last_name) VALUES (?, ?) RETURNING id")
                .bind(new_user.first_name.as_str())
                .bind(new_user.last_name.as_str())
                .fetch_one(&mut *conn)
                .await
                .map_err(map_sqlx)?;

        Ok(User::new(UserId(id), new_user.first_name, new_user.last_name))
    }

    async fn get(&self, id: UserId) -> DomainResult<Option<User>> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => hydrate(conn, row).await.map(Some),
            None => Ok(None),
        }
    }

    fn get_all(&self) -> UserQuery<'_> {
        UserQuery::new(self)
    }

    async fn count_matching(&self, filter: &UserFilter) -> DomainResult<u64> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM users");
        push_user_conditions(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_matching(&self, filter: &UserFilter) -> DomainResult<Vec<User>> {
        let mut guard = self.session.lock().await;
        let conn = Session::<Sqlite>::connection(&mut guard)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));
        push_user_conditions(&mut builder, filter);
        builder.push(" ORDER BY id");
        push_limit(&mut builder, filter.limit);

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(hydrate(&mut *conn, row).await?);
        }
        Ok(users)
    }
}
