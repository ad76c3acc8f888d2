use std::sync::Arc;

use dioxus::prelude::*;

use api_client::{RegisterFlowError, SessionClient, TokenStore};
use shared_types::RegisterForm;
use shared_ui::{Checkbox, Input, Label};

use crate::auth::use_auth;
use crate::routes::auth_shell::AuthSplit;
use crate::routes::Route;

/// Registration page. Validates locally (password confirmation, compliance
/// agreements) before calling the API, then auto-logs-in on success. A
/// failed auto-login leaves the user on this page with an error; the account
/// itself was created.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_context::<SessionClient>();
    let tokens = use_context::<Arc<dyn TokenStore>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut agreed_terms = use_signal(|| false);
    let mut agreed_privacy = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in, skip the form.
    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        let client = client.clone();
        let tokens = tokens.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);

            let form = RegisterForm {
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
                agreed_terms: agreed_terms(),
                agreed_privacy: agreed_privacy(),
                ..RegisterForm::default()
            };

            if let Err(err) = form.validate() {
                error_msg.set(Some(err.to_string()));
                return;
            }
            let request = form.to_request();

            loading.set(true);

            let result = client
                .register_with_auto_login(tokens.as_ref(), &request)
                .await;

            // The account exists once the register step succeeds, even when
            // the follow-up login fails; reset the form in both cases.
            if matches!(&result, Ok(_) | Err(RegisterFlowError::AutoLogin(_))) {
                email.set(String::new());
                password.set(String::new());
                confirm_password.set(String::new());
                agreed_terms.set(false);
                agreed_privacy.set(false);
            }

            match result {
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
            h2 { class: "auth-heading", "Register for Thicket" }
            span { class: "auth-subheading",
                "Create your account to access the ATMS. Personal information can be edited once account has been approved."
            }

            form { class: "auth-form", onsubmit: handle_register,
                div { class: "auth-field",
                    Label { html_for: "email", "Email" }
                    Input {
                        input_type: "email",
                        id: "email",
                        required: true,
                        placeholder: "Enter your email",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "auth-field",
                    Label { html_for: "password", "Password" }
                    Input {
                        input_type: "password",
                        id: "password",
                        required: true,
                        placeholder: "Enter your password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                }
                div { class: "auth-field",
                    Label { html_for: "confirm-password", "Confirm Password" }
                    Input {
                        input_type: "password",
                        id: "confirm-password",
                        required: true,
                        placeholder: "Re-enter your password",
                        value: confirm_password(),
                        on_input: move |e: FormEvent| confirm_password.set(e.value()),
                    }
                }
                div { class: "auth-compliance",
                    Checkbox {
                        checked: agreed_terms(),
                        required: true,
                        on_checked_change: move |checked| agreed_terms.set(checked),
                        "I agree to the "
                        Link { to: Route::Terms {}, "Terms & Conditions" }
                    }
                    Checkbox {
                        checked: agreed_privacy(),
                        required: true,
                        on_checked_change: move |checked| agreed_privacy.set(checked),
                        "I agree to the "
                        Link { to: Route::Privacy {}, "Data Privacy Policy" }
                    }
                }
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }
                button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
                p { class: "auth-link",
                    Link { to: Route::Login {},
                        "Already have an account? "
                        span { class: "auth-link-accent", "Login" }
                    }
                }
            }
        }
    }
}
