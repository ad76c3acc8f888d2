use api_client::{ClientError, MemoryTokenStore, RegisterFlowError, SessionClient, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{RegisterForm, RegisterFormError};

use crate::common::{spawn_auth_api, Behavior, MOCK_TOKEN};

fn valid_form() -> RegisterForm {
    RegisterForm {
        email: "new@example.com".into(),
        password: "correcthorse".into(),
        confirm_password: "correcthorse".into(),
        agreed_terms: true,
        agreed_privacy: true,
        ..RegisterForm::default()
    }
}

#[tokio::test]
async fn invalid_forms_never_reach_the_network() {
    let (_base_url, hits) = spawn_auth_api(Behavior::default()).await;

    let mismatched = RegisterForm {
        confirm_password: "different".into(),
        ..valid_form()
    };
    assert_eq!(
        mismatched.validate(),
        Err(RegisterFormError::PasswordMismatch)
    );

    let unchecked = RegisterForm {
        agreed_privacy: false,
        ..valid_form()
    };
    assert_eq!(
        unchecked.validate(),
        Err(RegisterFormError::ComplianceRequired)
    );

    // Neither invalid form produced a request.
    assert_eq!(hits.register(), 0);
    assert_eq!(hits.login(), 0);
}

#[tokio::test]
async fn register_with_auto_login_persists_the_token() {
    let (base_url, hits) = spawn_auth_api(Behavior::default()).await;
    let client = SessionClient::new(base_url);
    let store = MemoryTokenStore::new();

    let form = valid_form();
    form.validate().unwrap();
    let token = client
        .register_with_auto_login(&store, &form.to_request())
        .await
        .unwrap();

    assert_eq!(token, MOCK_TOKEN);
    assert_eq!(store.get(), Some(MOCK_TOKEN.to_string()));
    assert_eq!(hits.register(), 1);
    assert_eq!(hits.login(), 1);
}

#[tokio::test]
async fn rejected_registration_skips_the_login_step() {
    let behavior = Behavior {
        register_ok: false,
        ..Behavior::default()
    };
    let (base_url, hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);
    let store = MemoryTokenStore::new();

    let err = client
        .register_with_auto_login(&store, &valid_form().to_request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RegisterFlowError::Register(ClientError::Api {
            status: 409,
            message: "Email already registered".to_string(),
        })
    );
    assert_eq!(err.user_message(), "Email already registered");
    assert_eq!(hits.register(), 1);
    assert_eq!(hits.login(), 0);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn failed_auto_login_is_tagged_as_the_second_step() {
    let behavior = Behavior {
        login_ok: false,
        ..Behavior::default()
    };
    let (base_url, hits) = spawn_auth_api(behavior).await;
    let client = SessionClient::new(base_url);
    let store = MemoryTokenStore::new();

    let err = client
        .register_with_auto_login(&store, &valid_form().to_request())
        .await
        .unwrap_err();

    // The account exists server-side even though the chained login failed.
    assert!(matches!(err, RegisterFlowError::AutoLogin(_)));
    assert_eq!(hits.register(), 1);
    assert_eq!(hits.login(), 1);
    assert_eq!(store.get(), None);
}
