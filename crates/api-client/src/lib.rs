pub mod client;
pub mod error;
pub mod token;

pub use client::SessionClient;
pub use error::{ClientError, RegisterFlowError, NETWORK_ERROR_MESSAGE};
pub use token::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};

#[cfg(target_arch = "wasm32")]
pub use token::BrowserTokenStore;
