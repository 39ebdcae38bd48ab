// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::CreateUserCommand,
    dto::{UserDto, UserIdDto},
    queries::users::{GetUserQuery, ListUsersQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserIdDto>)> {
    let command = CreateUserCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
    };

    let id = state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserIdDto::from(id))))
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<UserListParams>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            last_name: params.last_name,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
