use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(query.id);
        let uow = self.uow.begin().await?;
        let article = uow.articles().get(&id).await?;
        uow.rollback().await?;

        article
            .map(Into::into)
            .ok_or(ApplicationError::ArticleNotFound(id))
    }
}
