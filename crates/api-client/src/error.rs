use std::fmt;

/// Fixed user-visible text for requests that never completed. The underlying
/// transport error goes to the log, never to the user.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Outcomes of a Session Client call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Well-formed non-2xx response carrying a server-supplied message,
    /// surfaced to the user verbatim.
    Api { status: u16, message: String },
    /// 401 from the session endpoint. A control-flow signal (redirect to
    /// login), never displayed as an error.
    Unauthorized,
    /// The request could not complete. Holds the transport detail for
    /// diagnostics only.
    Network(String),
}

impl ClientError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        tracing::warn!(error = %err, "auth API request failed");
        ClientError::Network(err.to_string())
    }

    /// Text suitable for an error slot in a form or header.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Unauthorized => "Session expired".to_string(),
            ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Api { status, message } => write!(f, "api error ({status}): {message}"),
            ClientError::Unauthorized => write!(f, "unauthorized"),
            ClientError::Network(detail) => write!(f, "network error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Failure of the register-then-login chain, tagged with the failing step so
/// the form can show a step-specific message.
///
/// An `AutoLogin` failure means the account was still created server-side;
/// the caller must not treat it as a registration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterFlowError {
    Register(ClientError),
    AutoLogin(ClientError),
}

impl RegisterFlowError {
    pub fn user_message(&self) -> String {
        match self {
            RegisterFlowError::Register(inner) => inner.user_message(),
            // The chained login gets its own generic text when the transport
            // failed, so the user can tell which step broke.
            RegisterFlowError::AutoLogin(ClientError::Network(_)) => {
                "Login post-registration error".to_string()
            }
            RegisterFlowError::AutoLogin(inner) => inner.user_message(),
        }
    }
}

impl fmt::Display for RegisterFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterFlowError::Register(inner) => write!(f, "register step failed: {inner}"),
            RegisterFlowError::AutoLogin(inner) => write!(f, "auto-login step failed: {inner}"),
        }
    }
}

impl std::error::Error for RegisterFlowError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_message_is_surfaced_verbatim() {
        let err = ClientError::Api {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn network_detail_never_reaches_the_user() {
        let err = ClientError::Network("connection refused (os error 111)".into());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn unauthorized_is_distinguished() {
        assert!(ClientError::Unauthorized.is_unauthorized());
        assert!(!ClientError::Network(String::new()).is_unauthorized());
    }

    #[test]
    fn register_step_error_keeps_server_message() {
        let err = RegisterFlowError::Register(ClientError::Api {
            status: 409,
            message: "Email already registered".into(),
        });
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn auto_login_transport_failure_has_step_specific_text() {
        let err = RegisterFlowError::AutoLogin(ClientError::Network("timeout".into()));
        assert_eq!(err.user_message(), "Login post-registration error");
    }
}
