mod list;
mod profile;
mod service;

pub use list::ListUsersQuery;
pub use profile::GetUserQuery;
pub use service::UserQueryService;
