//! Forced sign-out through the real client and a throwaway axum backend.

use std::sync::Arc;
use std::time::Duration;

use api::{ApiClient, ApiError, ClientConfig};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use session::SessionManager;
use store::{MemoryStore, SharedTokenStore, TokenStore};

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] != "secret" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Invalid credentials" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "user": { "id": "u-9", "email": body["email"], "name": "Ana", "role": "ADMIN" },
                "token": "access-1",
                "refreshToken": "refresh-1"
            }
        })),
    )
}

/// Every token has been revoked server side.
async fn sites() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Token expired" })),
    )
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/sites", get(sites));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api")
}

/// Local storage that is full or disabled: every write is lost.
struct ForgetfulStore;

impl TokenStore for ForgetfulStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

fn session_for(url: &str, tokens: SharedTokenStore) -> SessionManager<ApiClient> {
    let config = ClientConfig::new(url).with_remote_logging(false);
    let api = ApiClient::new(config, tokens).unwrap();
    SessionManager::from_client(api)
}

#[tokio::test]
async fn test_concurrent_rejections_sign_out_once() {
    let url = spawn_backend().await;
    let tokens = MemoryStore::new();
    let session = session_for(&url, Arc::new(tokens.clone()));
    let mut events = session.backend().events().subscribe();

    session.login("ana@site.test", "secret").await.unwrap();
    assert!(tokens.access_token().is_some());

    let api = session.backend();
    let (first, second) = tokio::join!(api.get::<Value>("/sites"), api.get::<Value>("/sites"));
    assert!(first.unwrap_err().is_unauthorized());
    assert!(second.unwrap_err().is_unauthorized());

    assert!(session.wait_for_invalidation(&mut events).await);
    assert_eq!(session.current_user(), None);
    assert!(tokens.is_empty());

    // The second rejection finds nobody left to sign out
    let again =
        tokio::time::timeout(Duration::from_millis(100), session.wait_for_invalidation(&mut events))
            .await;
    assert!(again.is_err(), "signed out twice");
}

#[tokio::test]
async fn test_rejection_signs_out_when_tokens_were_never_stored() {
    let url = spawn_backend().await;
    let session = session_for(&url, Arc::new(ForgetfulStore));
    let mut events = session.backend().events().subscribe();

    session.login("ana@site.test", "secret").await.unwrap();
    assert!(session.current_user().is_some());

    let err = session.backend().get::<Value>("/sites").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: "Token expired".into()
        }
    );
    assert!(session.wait_for_invalidation(&mut events).await);
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn test_bad_password_keeps_signed_in_user() {
    let url = spawn_backend().await;
    let tokens = MemoryStore::new();
    let session = session_for(&url, Arc::new(tokens.clone()));
    let mut events = session.backend().events().subscribe();
    session.login("ana@site.test", "secret").await.unwrap();

    let err = session.login("ana@site.test", "nope").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(session.current_user().is_some());
    assert_eq!(tokens.access_token().as_deref(), Some("access-1"));
    assert_eq!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    );
}
