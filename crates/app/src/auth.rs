use dioxus::prelude::*;
use shared_types::{SessionUser, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
    /// Non-fatal session check failure, surfaced in the dashboard header.
    /// A 401 never lands here; that redirects to login instead.
    pub session_error: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            session_error: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
        self.session_error.set(None);
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
        self.session_error.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The current user's role, defaulting to tenant when no session is loaded.
pub fn use_user_role() -> UserRole {
    let auth = use_auth();
    let role = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.role)
        .unwrap_or_default();
    role
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use pretty_assertions::assert_eq;

    // The login and register pages both gate their already-signed-in
    // redirect on `is_authenticated`, and the session guard drives the
    // login redirect off `clear_auth`; pin the flag's transitions.
    #[test]
    fn authenticated_flag_follows_the_session() {
        let mut dom = VirtualDom::new(|| {
            let mut auth = use_context_provider(AuthState::new);
            assert!(!auth.is_authenticated());

            auth.set_user(SessionUser::default());
            assert!(auth.is_authenticated());

            auth.clear_auth();
            assert!(!auth.is_authenticated());

            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    #[test]
    fn loading_a_session_clears_a_stale_fetch_error() {
        let mut dom = VirtualDom::new(|| {
            let mut auth = use_context_provider(AuthState::new);
            auth.session_error.set(Some("Network error".to_string()));

            auth.set_user(SessionUser::default());
            assert_eq!(*auth.session_error.read(), None);

            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }

    #[test]
    fn role_defaults_to_tenant_until_a_session_loads() {
        let mut dom = VirtualDom::new(|| {
            let mut auth = use_context_provider(AuthState::new);
            assert_eq!(use_user_role(), UserRole::Tenant);

            auth.set_user(SessionUser {
                role: UserRole::Admin,
                ..SessionUser::default()
            });
            assert_eq!(use_user_role(), UserRole::Admin);

            rsx! { div {} }
        });
        dom.rebuild_in_place();
    }
}
