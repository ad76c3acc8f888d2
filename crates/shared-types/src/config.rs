/// Fallback auth API origin for local development (Flask's default port).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the external auth API.
///
/// Baked into the bundle at compile time from `ATMS_API_URL`, like the
/// `NEXT_PUBLIC_*` convention the deployment uses. Trailing slashes are
/// stripped so paths can be appended with a single `/`.
pub fn api_base_url() -> String {
    let raw = option_env!("ATMS_API_URL").unwrap_or(DEFAULT_API_URL);
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
        assert!(!api_base_url().is_empty());
    }
}
