pub mod articles;
pub mod users;

pub use articles::{ArticleDto, ArticleIdDto};
pub use users::{UserDto, UserIdDto};
