//! Shared helpers for the HTTP integration tests.

use std::sync::Arc;

use axum::response::Response;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tarecruit::server::{
    model::{app::AppState, session::user::SessionUserId},
    notify::LogNotifier,
};
use tarecruit_test_utils::prelude::*;
use tower_sessions::Session;

/// Application state backed by the test database with notices only logged
pub fn app_state(test: &TestContext) -> AppState {
    AppState {
        db: test.db.clone(),
        notifier: Arc::new(LogNotifier),
    }
}

/// Place `user_id` in the session as the login layer would
pub async fn login(session: &Session, user_id: i32) {
    SessionUserId::insert(session, user_id).await.unwrap();
}

/// Deserialize a response body
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}
