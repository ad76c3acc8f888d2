use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// The token every successful mock login hands out.
pub const MOCK_TOKEN: &str = "mock-access-token";

/// Per-route request counters, shared between the mock server and the test
/// body so tests can assert which endpoints were actually hit.
#[derive(Clone, Default)]
pub struct Hits {
    login: Arc<AtomicUsize>,
    register: Arc<AtomicUsize>,
    session: Arc<AtomicUsize>,
}

impl Hits {
    pub fn login(&self) -> usize {
        self.login.load(Ordering::SeqCst)
    }

    pub fn register(&self) -> usize {
        self.register.load(Ordering::SeqCst)
    }

    pub fn session(&self) -> usize {
        self.session.load(Ordering::SeqCst)
    }
}

/// How the mock auth API responds. The defaults model a healthy backend with
/// an authenticated tenant session.
#[derive(Clone)]
pub struct Behavior {
    pub login_ok: bool,
    pub register_ok: bool,
    /// `Some(user)` answers the session endpoint with 200; `None` answers 401.
    pub session_user: Option<Value>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            login_ok: true,
            register_ok: true,
            session_user: Some(json!({
                "username": "jdoe",
                "email": "jdoe@example.com",
                "role": "tenant",
            })),
        }
    }
}

#[derive(Clone)]
struct MockState {
    behavior: Behavior,
    hits: Hits,
}

/// Spawn the mock auth API on an ephemeral port. Returns the base URL to
/// point a `SessionClient` at and the request counters. The server task is
/// dropped with the test runtime.
pub async fn spawn_auth_api(behavior: Behavior) -> (String, Hits) {
    let hits = Hits::default();
    let state = MockState {
        behavior,
        hits: hits.clone(),
    };

    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/session", get(session))
        .route("/auth/logout", post(logout))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock auth api");
    let addr = listener.local_addr().expect("mock auth api addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock auth api");
    });

    (format!("http://{addr}"), hits)
}

async fn login(
    State(state): State<MockState>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hits.login.fetch_add(1, Ordering::SeqCst);
    if state.behavior.login_ok {
        (StatusCode::OK, Json(json!({ "access_token": MOCK_TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
    }
}

async fn register(
    State(state): State<MockState>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.hits.register.fetch_add(1, Ordering::SeqCst);
    if state.behavior.register_ok {
        (StatusCode::CREATED, Json(json!({ "message": "registered" })))
    } else {
        (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Email already registered" })),
        )
    }
}

async fn session(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    state.hits.session.fetch_add(1, Ordering::SeqCst);
    match &state.behavior.session_user {
        Some(user) => (StatusCode::OK, Json(json!({ "user": user }))),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        ),
    }
}

async fn logout() -> StatusCode {
    StatusCode::OK
}
