use std::fmt;

use crate::models::UserRole;
use crate::requests::RegisterRequest;

/// Local (pre-network) validation failures on the registration form.
///
/// These are detected synchronously, reported to the user, and never sent to
/// the server. Checks run in a fixed order: password confirmation first, then
/// the compliance acknowledgements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFormError {
    PasswordMismatch,
    ComplianceRequired,
}

impl fmt::Display for RegisterFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterFormError::PasswordMismatch => write!(f, "Passwords do not match"),
            RegisterFormError::ComplianceRequired => {
                write!(f, "You must agree to all compliance checkboxes.")
            }
        }
    }
}

impl std::error::Error for RegisterFormError {}

/// Snapshot of the registration form at submit time.
///
/// Session-scoped: built inside the submit handler, discarded after a
/// successful submission or when the user navigates away.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub username: String,
    pub role: UserRole,
    pub agreed_terms: bool,
    pub agreed_privacy: bool,
}

impl RegisterForm {
    /// Run the local checks in order. Side-effect free and idempotent:
    /// resubmitting the same invalid form reproduces the same error.
    pub fn validate(&self) -> Result<(), RegisterFormError> {
        if self.password != self.confirm_password {
            return Err(RegisterFormError::PasswordMismatch);
        }
        if !self.agreed_terms || !self.agreed_privacy {
            return Err(RegisterFormError::ComplianceRequired);
        }
        Ok(())
    }

    /// The wire payload for a validated form. The confirmation field and the
    /// compliance flags never leave the client.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            username: self.username.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            email: "user@example.com".into(),
            password: "correcthorse".into(),
            confirm_password: "correcthorse".into(),
            username: "user".into(),
            role: UserRole::Tenant,
            agreed_terms: true,
            agreed_privacy: true,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn mismatched_passwords_fail_first() {
        // Mismatch wins even when compliance is also missing.
        let form = RegisterForm {
            confirm_password: "different".into(),
            agreed_terms: false,
            agreed_privacy: false,
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(RegisterFormError::PasswordMismatch));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn missing_either_compliance_box_fails() {
        for (terms, privacy) in [(false, true), (true, false), (false, false)] {
            let form = RegisterForm {
                agreed_terms: terms,
                agreed_privacy: privacy,
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(RegisterFormError::ComplianceRequired));
        }
        assert_eq!(
            RegisterFormError::ComplianceRequired.to_string(),
            "You must agree to all compliance checkboxes."
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let form = RegisterForm {
            confirm_password: "different".into(),
            ..valid_form()
        };
        let first = form.validate();
        let second = form.validate();
        assert_eq!(first, second);
    }

    #[test]
    fn request_omits_client_only_fields() {
        let req = valid_form().to_request();
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("confirm_password").is_none());
        assert!(json.get("agreed_terms").is_none());
        assert_eq!(json["email"], "user@example.com");
    }
}
