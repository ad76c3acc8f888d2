use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. The token is opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: UserRole,
}

/// Error envelope the auth API uses for non-2xx responses: `{ "error": ... }`.
/// The message is surfaced to the user verbatim when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_role_lowercase() {
        let req = RegisterRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            username: "abc".into(),
            role: UserRole::Tenant,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "tenant");
    }

    #[test]
    fn error_body_tolerates_unexpected_shapes() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.error, None);
    }
}
