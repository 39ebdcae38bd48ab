// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;

use super::mocks::FixedClock;
use blog_core::application::commands::users::CreateUserCommand;
use blog_core::application::ports::{time::Clock, unit_of_work::UnitOfWorkFactory};
use blog_core::application::services::ApplicationServices;
use blog_core::domain::user::UserId;
use blog_core::infrastructure::{database, unit_of_work::SqliteUnitOfWorkFactory};
use blog_core::presentation::http::{routes::build_router, state::HttpState};

/// Fresh in-memory database with the schema applied.
pub async fn sqlite_factory() -> Arc<SqliteUnitOfWorkFactory> {
    let pool = database::init_sqlite_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_sqlite_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(SqliteUnitOfWorkFactory::new(pool))
}

pub fn build_services(
    factory: Arc<dyn UnitOfWorkFactory>,
    clock: Arc<dyn Clock>,
) -> ApplicationServices {
    ApplicationServices::new(factory, clock)
}

/// Services over a fresh database, plus the clock driving them.
pub async fn sqlite_services() -> (ApplicationServices, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let services = build_services(sqlite_factory().await, Arc::clone(&clock) as Arc<dyn Clock>);
    (services, clock)
}

pub async fn seed_user(services: &ApplicationServices, first: &str, last: &str) -> UserId {
    services
        .user_commands
        .create_user(CreateUserCommand {
            first_name: first.into(),
            last_name: last.into(),
        })
        .await
        .expect("create user")
}

pub async fn make_test_router() -> axum::Router {
    let (services, _clock) = sqlite_services().await;
    router_for(services)
}

pub fn router_for(services: ApplicationServices) -> axum::Router {
    build_router(HttpState {
        services: Arc::new(services),
    })
}

pub fn json_request(method: Method, uri: &str, body: &Value, actor: Option<i64>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, actor: Option<i64>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
