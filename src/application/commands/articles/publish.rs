// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, user::UserId},
};

pub struct PublishArticleCommand {
    pub article_id: String,
    pub user_id: i64,
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .change_status(
                ArticleId::from(command.article_id),
                UserId(command.user_id),
                |article, now| article.publish(now),
            )
            .await?;

        tracing::info!(article_id = %article.id, user_id = %article.user_id, "article published");
        Ok(article.into())
    }
}
