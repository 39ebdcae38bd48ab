pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User};
pub use query::{UserFilter, UserQuery};
pub use repository::UserRepository;
pub use value_objects::UserId;
