//! Integration tests for the REST client against a local stub server.
//!
//! These validate the client's central behaviors end to end — bearer
//! attachment, forced logout on 401, error pass-through, identity-array
//! unwrapping — without the real platform API.

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use sc_api::{LoginRequest, RestShowcaseClient, ShowcaseApi};
use sc_domain::config::ApiConfig;
use sc_domain::error::Error;
use sc_domain::{Identity, Role};
use sc_session::{GuardDecision, LoginEntry, MemoryStorage, RouteGuard, SessionStore};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Harness
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> (RestShowcaseClient, Arc<SessionStore>) {
    let sessions = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
    let cfg = ApiConfig {
        base_url,
        timeout_ms: 2000,
    };
    let client = RestShowcaseClient::new(&cfg, sessions.clone()).unwrap();
    (client, sessions)
}

fn identity(role: Role) -> Identity {
    Identity {
        id: "u-1".into(),
        name: "Alva Berg".into(),
        email: "alva@example.edu".into(),
        role,
        class: None,
        picture: None,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Bearer attachment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn bearer_header_attached_when_session_present() {
    let app = Router::new().route(
        "/api/projects",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            if auth == "Bearer tok-123" {
                (StatusCode::OK, Json(json!([])))
            } else {
                (
                    StatusCode::IM_A_TEAPOT,
                    Json(json!({ "message": format!("bad auth: '{auth}'") })),
                )
            }
        }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);
    sessions.login(identity(Role::User), "tok-123".into());

    let projects = client.list_projects().await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn bearer_header_absent_when_logged_out() {
    let app = Router::new().route(
        "/api/projects",
        get(|headers: HeaderMap| async move {
            if headers.contains_key("authorization") {
                (
                    StatusCode::IM_A_TEAPOT,
                    Json(json!({ "message": "unexpected credential" })),
                )
            } else {
                (StatusCode::OK, Json(json!([])))
            }
        }),
    );
    let base = spawn(app).await;
    let (client, _sessions) = client_for(base);

    let projects = client.list_projects().await.unwrap();
    assert!(projects.is_empty());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 401 handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn unauthorized_clears_session_and_guard_redirects() {
    let app = Router::new().route(
        "/api/projects",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "jwt expired" })),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);
    sessions.login(identity(Role::Moderator), "stale-token".into());

    let guard = RouteGuard::role(LoginEntry::Admin, Role::Moderator);
    assert_eq!(guard.evaluate(&sessions), GuardDecision::Allow);

    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)), "{err}");

    // The session is gone and the previously-allowed route now redirects.
    assert!(sessions.current().is_none());
    assert_eq!(
        guard.evaluate(&sessions),
        GuardDecision::RedirectLogin(LoginEntry::Admin)
    );
}

#[tokio::test]
async fn unauthorized_when_already_logged_out_stays_logged_out() {
    let app = Router::new().route(
        "/api/admin/stats",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "no token" }))) }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);

    let err = client.stats().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert!(sessions.current().is_none());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Error pass-through
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn validation_error_passes_through_with_message() {
    let app = Router::new().route(
        "/api/projects",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "title is required" })),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);
    sessions.login(identity(Role::User), "tok".into());

    let new = sc_api::NewProject {
        title: String::new(),
        summary: None,
        description: None,
        video_url: None,
        tech_stack: vec![],
        team: vec![],
    };
    let err = client.create_project(new, &[]).await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "title is required");
        }
        other => panic!("expected Api error, got {other}"),
    }

    // Non-401 failures never touch the session.
    assert!(sessions.current().is_some());
}

#[tokio::test]
async fn server_error_passes_through_without_retry() {
    use std::sync::atomic::{AtomicU32, Ordering};
    static CALLS: AtomicU32 = AtomicU32::new(0);

    let app = Router::new().route(
        "/api/alerts",
        get(|| async {
            CALLS.fetch_add(1, Ordering::SeqCst);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "boom" })))
        }),
    );
    let base = spawn(app).await;
    let (client, _sessions) = client_for(base);

    let err = client.list_alerts().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
    // One-shot: exactly one request hit the server.
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Login flow
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn login_unwraps_identity_array_and_establishes_session() {
    let app = Router::new().route(
        "/api/users/login",
        post(|| async {
            Json(json!({
                "token": "tok-login",
                "user": [{
                    "id": "u-7",
                    "name": "Siri Holm",
                    "email": "siri@example.edu",
                    "role": "moderator"
                }]
            }))
        }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);

    let resp = client
        .login(LoginRequest {
            email: "siri@example.edu".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    let (who, token) = resp.into_session().unwrap();
    sessions.login(who, token);

    let session = sessions.current().unwrap();
    assert_eq!(session.token, "tok-login");
    assert_eq!(session.identity.role, Role::Moderator);

    let guard = RouteGuard::role(LoginEntry::Admin, Role::Moderator);
    assert_eq!(guard.evaluate(&sessions), GuardDecision::Allow);
}

#[tokio::test]
async fn login_with_empty_identity_array_is_auth_error() {
    let app = Router::new().route(
        "/api/users/login",
        post(|| async { Json(json!({ "token": "tok", "user": [] })) }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);

    let resp = client
        .login(LoginRequest {
            email: "x@example.edu".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap();
    let err = resp.into_session().unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert!(sessions.current().is_none());
}

#[tokio::test]
async fn bad_credentials_surface_without_touching_session() {
    let app = Router::new().route(
        "/api/users/login",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "invalid email or password" })),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, sessions) = client_for(base);

    let err = client
        .login(LoginRequest {
            email: "x@example.edu".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 400, .. }));
    assert!(sessions.current().is_none());
}
