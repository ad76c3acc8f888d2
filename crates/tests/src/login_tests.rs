use api_client::{ClientError, MemoryTokenStore, SessionClient, TokenStore};
use pretty_assertions::assert_eq;

use crate::common::{spawn_auth_api, Behavior, MOCK_TOKEN};

#[tokio::test]
async fn successful_login_returns_the_token() {
    let (base_url, hits) = spawn_auth_api(Behavior::default()).await;
    let client = SessionClient::new(base_url);

    let token = client.login("jdoe@example.com", "hunter2").await.unwrap();

    assert_eq!(token, MOCK_TOKEN);
    assert_eq!(hits.login(), 1);
}

#[tokio::test]
async fn login_and_persist_writes_the_store_on_success() {
    let (base_url, _hits) = spawn_auth_api(Behavior::default()).await;
    let client = SessionClient::new(base_url);
    let store = MemoryTokenStore::new();

    client
        .login_and_persist(&store, "jdoe@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(store.get(), Some(MOCK_TOKEN.to_string()));
}

#[tokio::test]
async fn rejected_login_surfaces_the_server_message() {
    let behavior = Behavior {
        login_ok: false,
        ..Behavior::default()
    };
    let (base_url, _hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);

    let err = client
        .login("jdoe@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
    );
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn rejected_login_leaves_the_store_untouched() {
    let behavior = Behavior {
        login_ok: false,
        ..Behavior::default()
    };
    let (base_url, _hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);
    let store = MemoryTokenStore::new();
    store.set("stale-token");

    let result = client
        .login_and_persist(&store, "jdoe@example.com", "wrong")
        .await;

    assert!(result.is_err());
    assert_eq!(store.get(), Some("stale-token".to_string()));
}

#[tokio::test]
async fn unreachable_server_maps_to_the_generic_network_message() {
    // Nothing listens on this port.
    let client = SessionClient::new("http://127.0.0.1:9");

    let err = client.login("jdoe@example.com", "hunter2").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.user_message(), "Network error");
}
