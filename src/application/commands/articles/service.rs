// src/application/commands/articles/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::ownership::ensure_owner;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, unit_of_work::UnitOfWorkFactory},
    },
    domain::{
        article::{Article, ArticleId},
        errors::DomainResult,
        user::UserId,
    },
};

pub struct ArticleCommandService {
    pub(super) uow: Arc<dyn UnitOfWorkFactory>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }

    /// Shared path of publish, delete and archive.
    ///
    /// Checks run in a fixed order: the article must exist, then belong to
    /// `actor`, then accept the transition. Any failure drops the unit of
    /// work before commit, so nothing staged here survives it.
    pub(super) async fn change_status<F>(
        &self,
        article_id: ArticleId,
        actor: UserId,
        apply: F,
    ) -> ApplicationResult<Article>
    where
        F: FnOnce(&mut Article, DateTime<Utc>) -> DomainResult<()> + Send,
    {
        let uow = self.uow.begin().await?;
        let mut article = uow
            .articles()
            .get(&article_id)
            .await?
            .ok_or_else(|| ApplicationError::ArticleNotFound(article_id.clone()))?;

        ensure_owner(&article, actor)?;
        apply(&mut article, self.clock.now())?;

        uow.articles().save(&article).await?;
        uow.commit().await?;
        Ok(article)
    }
}
