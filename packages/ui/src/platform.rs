//! Platform-appropriate constructors for the session plumbing.
//!
//! Web builds persist the token in `localStorage`. Native builds (tests and
//! desktop previews) share one in-memory store for the whole process, so the
//! API client and the navigation guard observe the same token, matching the
//! globality `localStorage` gives the web platform for free.

use api::{ApiClient, ApiConfig};
use session::{AuthApi, SessionStore, TokenStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn token_store() -> impl TokenStore + Clone {
    session::WebTokenStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn token_store() -> impl TokenStore + Clone {
    use session::MemoryTokenStore;
    use std::sync::OnceLock;

    static TOKENS: OnceLock<MemoryTokenStore> = OnceLock::new();
    TOKENS.get_or_init(MemoryTokenStore::new).clone()
}

/// API client bound to the platform token store.
pub fn api_client() -> ApiClient<impl TokenStore + Clone> {
    ApiClient::new(ApiConfig::default(), token_store())
}

/// Session store over the platform token store and the API client.
pub fn session_store() -> SessionStore<impl TokenStore + Clone, impl AuthApi> {
    SessionStore::new(token_store(), api_client())
}
