pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use query::{ArticleFilter, ArticleQuery};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleStatus};
