use bookshelf_api::Request;
use bookshelf_auth::{session_from_settings, AuthError, FileTokenStore, Session, Settings, TokenStorage};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn login_stores_access_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(200)
                .json_body(json!({ "access_token": "abc.def.ghi", "token_type": "Bearer" }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(dir.path().join("access_token"));
    let session = Session::load(&store, server.base_url()).unwrap();
    let mut watcher = session.subscribe();

    session
        .login(Request::auth().login("ada@example.com", "hunter2"))
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));
    assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));
    assert_eq!(watcher.changed().await, Some(true));
}

#[tokio::test]
async fn failed_login_keeps_previous_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(403).json_body(json!({ "detail": "Invalid credentials" }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(dir.path().join("access_token"));
    store.save("previous").unwrap();
    let session = Session::load(&store, server.base_url()).unwrap();

    let err = session
        .login(Request::auth().login("ada@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Api(_)));
    assert_eq!(session.token().as_deref(), Some("previous"));
    assert_eq!(store.load().unwrap().as_deref(), Some("previous"));
}

#[tokio::test]
async fn logout_after_login_removes_token_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(200)
                .json_body(json!({ "access_token": "abc.def.ghi", "token_type": "Bearer" }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(dir.path().join("access_token"));
    let session = Session::load(&store, server.base_url()).unwrap();

    session
        .login(Request::auth().login("ada@example.com", "hunter2"))
        .await
        .unwrap();
    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn register_does_not_log_in() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/users").json_body(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "hunter2"
            }));
            then.status(200).json_body(json!({
                "id": 3,
                "username": "ada",
                "email": "ada@example.com",
                "created_at": "2024-05-01T09:30:00"
            }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(dir.path().join("access_token"));
    let session = Session::load(&store, server.base_url()).unwrap();

    let user = session
        .register(Request::auth().register("ada", "ada@example.com", "hunter2"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(user.email, "ada@example.com");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn session_client_uses_current_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/votes/")
                .header("authorization", "Bearer persisted")
                .json_body(json!({ "book_id": 1, "direction": 0 }));
            then.status(201).json_body(json!({ "message": "no vote to remove" }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        server_url: server.base_url(),
        token_path: Some(dir.path().join("access_token")),
    };
    std::fs::write(dir.path().join("access_token"), "persisted").unwrap();

    let session = session_from_settings(&settings).unwrap();
    let response = session
        .client()
        .send(Request::votes().cast(1, 0))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "no vote to remove");
}

#[tokio::test]
async fn empty_token_login_is_an_error_and_keeps_previous_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(200)
                .json_body(json!({ "access_token": "", "token_type": "Bearer" }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at(dir.path().join("access_token"));
    store.save("previous").unwrap();
    let session = Session::load(&store, server.base_url()).unwrap();

    let err = session
        .login(Request::auth().login("ada@example.com", "hunter2"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::EmptyToken));
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("previous"));
    assert_eq!(store.load().unwrap().as_deref(), Some("previous"));
}
