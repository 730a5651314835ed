use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::{
    model::server::ServerListQueryDto,
    server::{
        controller::server::list_servers,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        router,
        state::AppState,
    },
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod list_servers;

/// Builds the full application router on top of the test database.
async fn test_app(test: &mut TestContext) -> Router {
    let store = test.session_store().await.unwrap();
    let db = test.database().await.unwrap().clone();

    router::router()
        .with_state(AppState::new(db))
        .layer(SessionManagerLayer::new(store))
}

/// Sends a GET request through the router.
async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Reads a response body as JSON.
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
