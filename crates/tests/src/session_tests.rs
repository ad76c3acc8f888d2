use api_client::{ClientError, SessionClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::UserRole;

use crate::common::{spawn_auth_api, Behavior};

#[tokio::test]
async fn authenticated_session_deserializes_the_user() {
    let behavior = Behavior {
        session_user: Some(json!({
            "username": "admin1",
            "email": "admin1@example.com",
            "role": "admin",
        })),
        ..Behavior::default()
    };
    let (base_url, hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);

    let session = client.fetch_session().await.unwrap();

    assert_eq!(session.user.username.as_deref(), Some("admin1"));
    assert_eq!(session.user.role, UserRole::Admin);
    assert_eq!(hits.session(), 1);
}

#[tokio::test]
async fn loose_session_payload_falls_back_to_tenant() {
    let behavior = Behavior {
        session_user: Some(json!({ "email": "who@example.com" })),
        ..Behavior::default()
    };
    let (base_url, _hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);

    let session = client.fetch_session().await.unwrap();

    assert_eq!(session.user.role, UserRole::Tenant);
    assert_eq!(session.user.display_name(), "who@example.com");
}

#[tokio::test]
async fn missing_session_is_the_unauthorized_signal() {
    let behavior = Behavior {
        session_user: None,
        ..Behavior::default()
    };
    let (base_url, _hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);

    let err = client.fetch_session().await.unwrap_err();

    assert_eq!(err, ClientError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn unreachable_session_endpoint_is_a_network_error() {
    let client = SessionClient::new("http://127.0.0.1:9");

    let err = client.fetch_session().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message(), "Network error");
}

#[tokio::test]
async fn logout_swallows_failures() {
    // Nothing listens here; logout must not panic or return an error.
    let client = SessionClient::new("http://127.0.0.1:9");
    client.logout().await;

    let (base_url, _hits) = spawn_auth_api(Behavior::default()).await;
    SessionClient::new(base_url).logout().await;
}
