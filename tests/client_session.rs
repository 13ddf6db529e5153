//! Client session end-to-end tests
//!
//! Runs the session manager against a real server on an ephemeral port, and
//! against a mocked server for the failure paths.

#![cfg(feature = "ssr")]

mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use campusflow::client::{
    AuthApi, ClientConfig, ClientError, ClientSession, MemorySessionStore, SessionManager,
    SessionStore,
};
use campusflow::shared::role::Role;
use campusflow::shared::user::PublicUser;

/// Serve the real router on an ephemeral port.
async fn spawn_app() -> (String, tokio::task::JoinHandle<()>) {
    let app = common::test_router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

fn manager_for(url: &str) -> SessionManager {
    let api = AuthApi::new(ClientConfig::with_server_url(url));
    SessionManager::new(api, Box::new(MemorySessionStore::new()))
}

#[tokio::test]
async fn test_signup_verify_logout_end_to_end() {
    let (url, server) = spawn_app().await;
    let mut session = manager_for(&url);

    // Signup caches the session
    let user = session
        .signup("Avery", "avery@campus.edu", "secret1", Role::Student)
        .await
        .unwrap();
    assert_eq!(user.name, "Avery");
    assert_eq!(user.role, Role::Student);
    assert!(session.is_authenticated());
    assert!(!session.token().unwrap().is_empty());

    // Verify resolves to the same identity
    let verified = session.verify_auth().await.unwrap();
    assert_eq!(verified.id, user.id);
    assert_eq!(verified.role, user.role);

    // Logout clears the cache without a server call
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());

    // With the server gone, verify still answers locally: no token means
    // unauthenticated, reported without any network attempt
    server.abort();
    let err = session.verify_auth().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
}

#[tokio::test]
async fn test_failed_login_leaves_no_session() {
    let (url, _server) = spawn_app().await;
    let mut session = manager_for(&url);

    let err = session.login("nobody@campus.edu", "wrong").await.unwrap_err();
    // The server's message arrives unchanged
    assert_eq!(err.to_string(), "Invalid email or password");

    assert!(!session.is_authenticated());
    // The store was never written either
    assert!(session.restore().is_none());
}

#[tokio::test]
async fn test_login_then_restart_restores_session() {
    let (url, _server) = spawn_app().await;

    // First "run": sign up and keep the persisted session
    let api = AuthApi::new(ClientConfig::with_server_url(url.as_str()));
    let mut store = MemorySessionStore::new();
    {
        let mut session = SessionManager::new(api.clone(), Box::new(MemorySessionStore::new()));
        session
            .signup("Avery", "avery@campus.edu", "secret1", Role::Student)
            .await
            .unwrap();
        store.save(session.current().unwrap()).unwrap();
    }

    // Second "run": restore, then re-verify against the server
    let mut session = SessionManager::new(api, Box::new(store));
    let restored = session.restore().unwrap().clone();
    assert_eq!(restored.user.email, "avery@campus.edu");

    let verified = session.verify_auth().await.unwrap();
    assert_eq!(verified.id, restored.user.id);
}

#[tokio::test]
async fn test_verify_failure_clears_token_and_profile_together() {
    // A server that rejects every verify call
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "message": "Authentication required",
            "error": "authentication_required",
        })))
        .mount(&mock)
        .await;

    // Preload a stale session
    let mut store = MemorySessionStore::new();
    store
        .save(&ClientSession {
            token: "stale-token".to_string(),
            user: PublicUser {
                id: uuid::Uuid::new_v4(),
                name: "Avery".to_string(),
                email: "avery@campus.edu".to_string(),
                role: Role::Student,
            },
        })
        .unwrap();

    let api = AuthApi::new(ClientConfig::with_server_url(mock.uri()));
    let mut session = SessionManager::new(api, Box::new(store));
    session.restore();
    assert!(session.is_authenticated());

    let err = session.verify_auth().await.unwrap_err();
    assert_eq!(err.to_string(), "Authentication required");

    // Both halves are gone, in memory and in the store
    assert!(session.current().is_none());
    assert!(session.token().is_none());
    assert!(session.restore().is_none());
}

#[tokio::test]
async fn test_role_isolation_through_client() {
    let (url, _server) = spawn_app().await;
    let mut session = manager_for(&url);
    session
        .signup("Avery", "avery@campus.edu", "secret1", Role::Student)
        .await
        .unwrap();
    let token = session.token().unwrap().to_string();

    let api = AuthApi::new(ClientConfig::with_server_url(url.as_str()));

    // Own dashboard works
    let user = api.dashboard(Role::Student, &token).await.unwrap();
    assert_eq!(user.role, Role::Student);

    // Another role's dashboard is a 403, not a silent downgrade
    let err = api.dashboard(Role::Teacher, &token).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Access restricted to teacher accounts");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_me_through_client() {
    let (url, _server) = spawn_app().await;
    let mut session = manager_for(&url);
    session
        .signup("Avery", "avery@campus.edu", "secret1", Role::Student)
        .await
        .unwrap();

    let api = AuthApi::new(ClientConfig::with_server_url(url.as_str()));
    let me = api.me(session.token().unwrap()).await.unwrap();
    assert_eq!(me.email, "avery@campus.edu");

    // Without a token the guarded endpoint rejects
    let err = api.me("").await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Api error, got {:?}", other),
    }
}
