// src/application/commands/articles/add.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleId, NewArticle},
        user::UserId,
    },
};

pub struct AddArticleCommand {
    pub title: String,
    pub description: String,
    pub content: String,
    pub user_id: i64,
}

impl AddArticleCommand {
    pub fn builder() -> AddArticleCommandBuilder {
        AddArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct AddArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    user_id: Option<i64>,
}

impl AddArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub const fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn build(self) -> Result<AddArticleCommand, &'static str> {
        Ok(AddArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            content: self.content.ok_or("content is required")?,
            user_id: self.user_id.ok_or("user_id is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn add_article(&self, command: AddArticleCommand) -> ApplicationResult<ArticleId> {
        let user_id = UserId(command.user_id);
        let uow = self.uow.begin().await?;
        let mut user = uow
            .users()
            .get(user_id)
            .await?
            .ok_or(ApplicationError::UserNotFound(user_id))?;

        let article = Article::draft(
            NewArticle {
                title: command.title,
                description: command.description,
                content: command.content,
                user_id: user.id,
            },
            self.clock.now(),
        );
        user.add_article(article.clone())?;

        let article = uow.articles().add(article).await?;
        uow.commit().await?;

        tracing::info!(article_id = %article.id, user_id = %user.id, "article drafted");
        Ok(article.id)
    }
}
