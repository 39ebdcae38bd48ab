use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::query::{UserFilter, UserQuery};
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the returned value carries the id assigned by storage.
    async fn add(&self, new_user: NewUser) -> DomainResult<User>;

    /// Load a user together with the articles it owns.
    async fn get(&self, id: UserId) -> DomainResult<Option<User>>;

    fn get_all(&self) -> UserQuery<'_>;

    async fn count_matching(&self, filter: &UserFilter) -> DomainResult<u64>;

    async fn find_matching(&self, filter: &UserFilter) -> DomainResult<Vec<User>>;
}
