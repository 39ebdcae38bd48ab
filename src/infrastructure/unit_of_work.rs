// src/infrastructure/unit_of_work.rs
//! SQL-backed units of work. Each one owns a single transaction and hands
//! out repositories that all run inside it.

use crate::application::ports::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::domain::article::ArticleRepository;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserRepository;
use crate::infrastructure::repositories::{
    PostgresArticleRepository, PostgresUserRepository, SqliteArticleRepository,
    SqliteUserRepository,
};
use crate::infrastructure::session::Session;
use async_trait::async_trait;
use sqlx::{Database, PgPool, Postgres, Sqlite, SqlitePool};

pub struct SqlUnitOfWork<DB: Database, U, A> {
    session: Session<DB>,
    users: U,
    articles: A,
}

pub type SqliteUnitOfWork = SqlUnitOfWork<Sqlite, SqliteUserRepository, SqliteArticleRepository>;
pub type PostgresUnitOfWork =
    SqlUnitOfWork<Postgres, PostgresUserRepository, PostgresArticleRepository>;

impl<DB: Database, U, A> SqlUnitOfWork<DB, U, A> {
    pub const fn new(session: Session<DB>, users: U, articles: A) -> Self {
        Self {
            session,
            users,
            articles,
        }
    }
}

#[async_trait]
impl<DB, U, A> UnitOfWork for SqlUnitOfWork<DB, U, A>
where
    DB: Database,
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn articles(&self) -> &dyn ArticleRepository {
        &self.articles
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.session.commit().await?;
        tracing::debug!("unit of work committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.session.rollback().await?;
        tracing::debug!("unit of work rolled back");
        Ok(())
    }
}

impl<DB: Database, U, A> Drop for SqlUnitOfWork<DB, U, A> {
    fn drop(&mut self) {
        if self.session.is_open() {
            tracing::debug!("unit of work dropped without commit; rolling back");
        }
    }
}

#[derive(Clone)]
pub struct SqliteUnitOfWorkFactory {
    pool: SqlitePool,
}

impl SqliteUnitOfWorkFactory {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SqliteUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let session = Session::begin(&self.pool).await?;
        let uow: SqliteUnitOfWork = SqlUnitOfWork::new(
            session.clone(),
            SqliteUserRepository::new(session.clone()),
            SqliteArticleRepository::new(session),
        );
        Ok(Box::new(uow))
    }
}

#[derive(Clone)]
pub struct PostgresUnitOfWorkFactory {
    pool: PgPool,
}

impl PostgresUnitOfWorkFactory {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PostgresUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let session = Session::begin(&self.pool).await?;
        let uow: PostgresUnitOfWork = SqlUnitOfWork::new(
            session.clone(),
            PostgresUserRepository::new(session.clone()),
            PostgresArticleRepository::new(session),
        );
        Ok(Box::new(uow))
    }
}
