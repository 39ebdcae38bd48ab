use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::{
        article::ArticleStatus,
        errors::DomainError,
        user::UserId,
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub user_id: Option<i64>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()
            .map_err(|err| match err {
                DomainError::Validation(msg) => ApplicationError::validation(msg),
                other => ApplicationError::from(other),
            })?;

        let uow = self.uow.begin().await?;
        let mut selection = uow.articles().get_all().limit(normalize_limit(query.limit));
        if let Some(status) = status {
            selection = selection.with_status(status);
        }
        if let Some(user_id) = query.user_id {
            selection = selection.owned_by(UserId(user_id));
        }
        let articles = selection.fetch().await?;
        uow.rollback().await?;

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
