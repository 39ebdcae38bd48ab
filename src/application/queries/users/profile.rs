use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId(query.id);
        let uow = self.uow.begin().await?;
        let user = uow.users().get(id).await?;
        uow.rollback().await?;

        user.map(Into::into).ok_or(ApplicationError::UserNotFound(id))
    }
}
