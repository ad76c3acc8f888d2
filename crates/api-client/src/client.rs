use shared_types::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest, Session};

use crate::error::{ClientError, RegisterFlowError};
use crate::token::TokenStore;

/// Thin wrapper over the external auth API.
///
/// Pure request/response: no retries, no caching, no request cancellation.
/// Every operation hits `{base_url}/auth/...` with JSON bodies; ambient
/// session cookies ride along (browser-managed on wasm, cookie jar on
/// native).
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn default_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: default_http_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an [`ClientError::Api`], preferring the
    /// server's `{error}` message and falling back to `fallback` when the
    /// body carries none.
    async fn api_error(resp: reqwest::Response, fallback: &str) -> ClientError {
        let status = resp.status().as_u16();
        let body: ErrorBody = resp.json().await.unwrap_or_default();
        ClientError::Api {
            status,
            message: body.error.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// POST `/auth/login`. Returns the opaque access token; the caller owns
    /// persisting it (see [`Self::login_and_persist`]).
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await
            .map_err(ClientError::network)?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp, "Login failed").await);
        }
        let parsed: LoginResponse = resp.json().await.map_err(ClientError::network)?;
        Ok(parsed.access_token)
    }

    /// Login and write the token to the store. The token is persisted only on
    /// success; a failed login leaves the store untouched.
    pub async fn login_and_persist(
        &self,
        store: &dyn TokenStore,
        email: &str,
        password: &str,
    ) -> Result<String, ClientError> {
        let token = self.login(email, password).await?;
        store.set(&token);
        Ok(token)
    }

    /// POST `/auth/register`. The caller validates the form locally first;
    /// this never sees the confirmation field or the compliance flags.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(req)
            .send()
            .await
            .map_err(ClientError::network)?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp, "Registration failed").await);
        }
        Ok(())
    }

    /// Register, then immediately log in with the same credentials and
    /// persist the token. The two steps fail distinguishably: an
    /// [`RegisterFlowError::AutoLogin`] failure means the account was still
    /// created server-side.
    pub async fn register_with_auto_login(
        &self,
        store: &dyn TokenStore,
        req: &RegisterRequest,
    ) -> Result<String, RegisterFlowError> {
        self.register(req).await.map_err(RegisterFlowError::Register)?;
        self.login_and_persist(store, &req.email, &req.password)
            .await
            .map_err(RegisterFlowError::AutoLogin)
    }

    /// GET `/auth/session` with ambient credentials. A 401 is the
    /// distinguished "unauthenticated" outcome (redirect trigger), not an
    /// error message.
    pub async fn fetch_session(&self) -> Result<Session, ClientError> {
        let resp = self
            .http
            .get(self.url("/auth/session"))
            .send()
            .await
            .map_err(ClientError::network)?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp, "Session fetch failed").await);
        }
        resp.json().await.map_err(ClientError::network)
    }

    /// Best-effort POST `/auth/logout`. Server-side invalidation is the
    /// backend's job; a failure here only gets a log line.
    pub async fn logout(&self) {
        if let Err(err) = self.http.post(self.url("/auth/logout")).send().await {
            tracing::debug!(error = %err, "logout request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = SessionClient::new("http://localhost:5000/");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/auth/login");
    }
}
