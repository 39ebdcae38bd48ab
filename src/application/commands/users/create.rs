use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{NewUser, UserId},
};

pub struct CreateUserCommand {
    pub first_name: String,
    pub last_name: String,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserId> {
        let uow = self.uow.begin().await?;
        let user = uow
            .users()
            .add(NewUser::new(command.first_name, command.last_name))
            .await?;
        uow.commit().await?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user.id)
    }
}
