use std::sync::{Arc, Mutex};

/// Storage key for the opaque access token. Overwritten on every successful
/// login; the client never inspects the value.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Where the access token lives between requests. Browser `localStorage` in
/// the bundle, an in-memory slot in native tests.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = None;
        }
    }
}

/// Token store backed by browser `localStorage`. Storage failures (private
/// browsing, quota) are swallowed: the token is a convenience for the bearer
/// flows handled elsewhere, and login itself works on ambient cookies.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}
