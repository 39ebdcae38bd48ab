// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, user::UserId},
};

/// Soft delete: the row stays, only its status becomes `deleted`.
pub struct DeleteArticleCommand {
    pub article_id: String,
    pub user_id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .change_status(
                ArticleId::from(command.article_id),
                UserId(command.user_id),
                |article, now| article.delete(now),
            )
            .await?;

        tracing::info!(article_id = %article.id, user_id = %article.user_id, "article deleted");
        Ok(article.into())
    }
}
