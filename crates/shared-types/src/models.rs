use serde::{Deserialize, Serialize};

/// ATMS user role, carried in the session payload and selecting which home
/// dashboard a user sees.
///
/// - `Tenant` — a renting tenant. Default for unknown or missing roles.
/// - `Admin` — property administrator, full dashboard.
/// - `Staff` — maintenance / operations staff.
/// - `Finance` — finance team, revenue views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Tenant,
    Admin,
    Staff,
    Finance,
}

impl UserRole {
    /// Parse from the session `role` claim. Unknown values default to Tenant.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "staff" => UserRole::Staff,
            "finance" => UserRole::Finance,
            _ => UserRole::Tenant,
        }
    }

    /// Lowercase string as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Tenant => "tenant",
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Finance => "finance",
        }
    }
}

/// The authenticated user as returned by `GET /auth/session`.
///
/// The session payload is loosely shaped upstream, so `username` and `email`
/// are both optional; use [`SessionUser::display_name`] instead of chaining
/// fallbacks at call sites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "role_from_string")]
    pub role: UserRole,
    /// Account creation timestamp, shown on the profile page when present.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn role_from_string<'de, D>(de: D) -> Result<UserRole, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw
        .as_deref()
        .map(UserRole::from_str_or_default)
        .unwrap_or_default())
}

impl SessionUser {
    /// Total fallback for the header: username, else email, else "Unknown".
    /// Blank strings count as absent.
    pub fn display_name(&self) -> String {
        for candidate in [&self.username, &self.email] {
            if let Some(value) = candidate {
                if !value.trim().is_empty() {
                    return value.clone();
                }
            }
        }
        "Unknown".to_string()
    }
}

/// Envelope for the session endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parses_known_values_case_insensitively() {
        assert_eq!(UserRole::from_str_or_default("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("staff"), UserRole::Staff);
        assert_eq!(UserRole::from_str_or_default("Finance"), UserRole::Finance);
        assert_eq!(UserRole::from_str_or_default("tenant"), UserRole::Tenant);
    }

    #[test]
    fn role_defaults_to_tenant_for_unknown() {
        assert_eq!(UserRole::from_str_or_default("landlord"), UserRole::Tenant);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Tenant);
    }

    #[test]
    fn display_name_prefers_username() {
        let user = SessionUser {
            username: Some("jdoe".into()),
            email: Some("j@example.com".into()),
            ..SessionUser::default()
        };
        assert_eq!(user.display_name(), "jdoe");
    }

    #[test]
    fn display_name_falls_back_to_email_then_unknown() {
        let user = SessionUser {
            username: None,
            email: Some("j@example.com".into()),
            ..SessionUser::default()
        };
        assert_eq!(user.display_name(), "j@example.com");

        let anonymous = SessionUser::default();
        assert_eq!(anonymous.display_name(), "Unknown");
    }

    #[test]
    fn display_name_treats_blank_as_absent() {
        let user = SessionUser {
            username: Some("   ".into()),
            email: Some("j@example.com".into()),
            ..SessionUser::default()
        };
        assert_eq!(user.display_name(), "j@example.com");
    }

    #[test]
    fn session_deserializes_loose_payload() {
        let session: Session =
            serde_json::from_str(r#"{"user":{"email":"a@b.c","role":"admin"}}"#).unwrap();
        assert_eq!(session.user.email.as_deref(), Some("a@b.c"));
        assert_eq!(session.user.username, None);
        assert_eq!(session.user.role, UserRole::Admin);
    }

    #[test]
    fn session_tolerates_missing_role() {
        let session: Session =
            serde_json::from_str(r#"{"user":{"username":"jdoe"}}"#).unwrap();
        assert_eq!(session.user.role, UserRole::Tenant);
    }
}
