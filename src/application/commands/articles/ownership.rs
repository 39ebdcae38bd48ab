use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::Article, user::UserId},
};

pub(super) fn ensure_owner(article: &Article, actor: UserId) -> ApplicationResult<()> {
    if article.is_owned_by(actor) {
        Ok(())
    } else {
        Err(ApplicationError::permission_denied(format!(
            "user {actor} is not allowed to change article {}",
            article.id
        )))
    }
}
