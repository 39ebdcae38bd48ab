// src/domain/article/query.rs
use crate::domain::article::entity::Article;
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub user_id: Option<UserId>,
    pub limit: Option<u32>,
}

/// A not-yet-executed selection of articles.
///
/// Obtained from [`ArticleRepository::get_all`]; narrowing it only edits the
/// filter, and rows are read when `count`, `first` or `fetch` is awaited.
pub struct ArticleQuery<'r> {
    repo: &'r dyn ArticleRepository,
    filter: ArticleFilter,
}

impl<'r> ArticleQuery<'r> {
    pub fn new(repo: &'r dyn ArticleRepository) -> Self {
        Self {
            repo,
            filter: ArticleFilter::default(),
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.filter.status = Some(status);
        self
    }

    pub fn owned_by(mut self, user_id: UserId) -> Self {
        self.filter.user_id = Some(user_id);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.filter.limit = Some(limit);
        self
    }

    pub async fn count(&self) -> DomainResult<u64> {
        self.repo.count_matching(&self.filter).await
    }

    pub async fn fetch(&self) -> DomainResult<Vec<Article>> {
        self.repo.find_matching(&self.filter).await
    }

    pub async fn first(self) -> DomainResult<Option<Article>> {
        let rows = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}
