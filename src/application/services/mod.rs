// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::{articles::ArticleCommandService, users::UserCommandService},
    ports::{time::Clock, unit_of_work::UnitOfWorkFactory},
    queries::{articles::ArticleQueryService, users::UserQueryService},
};

/// Every use case of the application, wired to one unit-of-work factory.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>, clock: Arc<dyn Clock>) -> Self {
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&uow)));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&uow),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&uow)));
        let user_queries = Arc::new(UserQueryService::new(uow));

        Self {
            user_commands,
            article_commands,
            article_queries,
            user_queries,
        }
    }
}
