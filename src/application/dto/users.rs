use crate::domain::user::{User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub article_ids: Vec<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let mut article_ids: Vec<String> = user
            .articles()
            .map(|article| article.id.to_string())
            .collect();
        article_ids.sort();

        Self {
            id: user.id.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            article_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdDto {
    pub id: i64,
}

impl From<UserId> for UserIdDto {
    fn from(id: UserId) -> Self {
        Self { id: id.into() }
    }
}
