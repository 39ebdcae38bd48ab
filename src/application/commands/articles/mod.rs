// src/application/commands/articles/mod.rs
mod add;
mod archive;
mod delete;
mod ownership;
mod publish;
mod service;

pub use add::{AddArticleCommand, AddArticleCommandBuilder};
pub use archive::ArchiveArticleCommand;
pub use delete::DeleteArticleCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
