use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult, queries::normalize_limit};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub last_name: Option<String>,
    pub limit: Option<u32>,
}

impl UserQueryService {
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let uow = self.uow.begin().await?;
        let mut selection = uow.users().get_all().limit(normalize_limit(query.limit));
        if let Some(last_name) = query.last_name {
            selection = selection.with_last_name(last_name);
        }
        let users = selection.fetch().await?;
        uow.rollback().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }
}
