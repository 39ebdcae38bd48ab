use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use crate::domain::user::repository::UserRepository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub last_name: Option<String>,
    pub limit: Option<u32>,
}

/// Deferred selection over users, see [`UserRepository::get_all`].
pub struct UserQuery<'r> {
    repo: &'r dyn UserRepository,
    filter: UserFilter,
}

impl<'r> UserQuery<'r> {
    pub fn new(repo: &'r dyn UserRepository) -> Self {
        Self {
            repo,
            filter: UserFilter::default(),
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.filter.last_name = Some(last_name.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.filter.limit = Some(limit);
        self
    }

    pub async fn count(&self) -> DomainResult<u64> {
        self.repo.count_matching(&self.filter).await
    }

    pub async fn fetch(&self) -> DomainResult<Vec<User>> {
        self.repo.find_matching(&self.filter).await
    }

    pub async fn first(self) -> DomainResult<Option<User>> {
        let rows = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}
