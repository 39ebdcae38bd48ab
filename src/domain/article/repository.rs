use crate::domain::article::entity::Article;
use crate::domain::article::query::{ArticleFilter, ArticleQuery};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Article storage bound to the session of one unit of work.
///
/// Nothing written here is visible outside the transaction until the owning
/// unit of work commits.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stage a new article for insertion.
    async fn add(&self, article: Article) -> DomainResult<Article>;

    /// Look an article up by id. Absence is `Ok(None)`, never an error.
    async fn get(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Write back the mutable fields (status, `updated_at`) of a loaded article.
    async fn save(&self, article: &Article) -> DomainResult<()>;

    /// Lazy view over every article; nothing is loaded until it is awaited.
    fn get_all(&self) -> ArticleQuery<'_>;

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64>;

    async fn find_matching(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}
