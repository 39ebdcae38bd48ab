// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddArticleCommand, ArchiveArticleCommand, DeleteArticleCommand, PublishArticleCommand,
    },
    dto::{ArticleDto, ArticleIdDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ActingUser, ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AddArticleRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub user_id: i64,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = ListArticlesQuery {
        status: params.status,
        user_id: params.user_id,
        limit: params.limit,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn add_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<AddArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleIdDto>)> {
    let command = AddArticleCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        user_id: payload.user_id,
    };

    let id = state
        .services
        .article_commands
        .add_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleIdDto::from(id))))
}

pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<ArticleDto>> {
    let command = PublishArticleCommand {
        article_id: id,
        user_id: actor.into(),
    };

    state
        .services
        .article_commands
        .publish_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn archive_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<ArticleDto>> {
    let command = ArchiveArticleCommand {
        article_id: id,
        user_id: actor.into(),
    };

    state
        .services
        .article_commands
        .archive_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<ArticleDto>> {
    let command = DeleteArticleCommand {
        article_id: id,
        user_id: actor.into(),
    };

    state
        .services
        .article_commands
        .delete_article(command)
        .await
        .into_http()
        .map(Json)
}
