// src/presentation/http/extractors.rs
use crate::domain::user::UserId;
use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use super::error::HttpError;

/// JSON body whose rejections render as an [`HttpError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);

pub const ACTING_USER_HEADER: &str = "x-user-id";

/// The user on whose behalf a state-changing request is made, taken from the
/// `x-user-id` header.
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub UserId);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTING_USER_HEADER)
            .ok_or_else(|| HttpError::bad_request(format!("missing {ACTING_USER_HEADER} header")))?;

        let id = raw
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                HttpError::bad_request(format!("{ACTING_USER_HEADER} must be an integer user id"))
            })?;

        Ok(Self(UserId(id)))
    }
}
