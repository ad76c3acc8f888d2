use std::sync::Arc;

use dioxus::prelude::*;

use api_client::{SessionClient, TokenStore};
use shared_ui::{Input, Label};

use crate::auth::use_auth;
use crate::routes::auth_shell::AuthSplit;
use crate::routes::Route;

/// Login page with email/password credentials.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_context::<SessionClient>();
    let tokens = use_context::<Arc<dyn TokenStore>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in, skip the form.
    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        let tokens = tokens.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match client
                .login_and_persist(tokens.as_ref(), &email(), &password())
                .await
            {
                Ok(_) => {
                    navigator().replace(Route::Home {});
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            loading.set(false);
        }
    };

    rsx! {
        AuthSplit {
            h2 { class: "auth-heading", "Login to Thicket" }
            span { class: "auth-subheading", "Sign in to access the full extent of the ATMS" }

            form { class: "auth-form", onsubmit: handle_login,
                div { class: "auth-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        input_type: "email",
                        id: "login-email",
                        required: true,
                        placeholder: "Enter your email",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "auth-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        input_type: "password",
                        id: "login-password",
                        required: true,
                        placeholder: "Enter your password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }
                p { class: "auth-link",
                    Link { to: Route::Register {},
                        "Don't have an account? "
                        span { class: "auth-link-accent", "Register" }
                    }
                }
            }
        }
    }
}
