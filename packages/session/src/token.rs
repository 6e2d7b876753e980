use std::sync::{Arc, Mutex};

/// Storage key holding the raw access token string.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Persistence seam for the access token.
///
/// The token's lifecycle is independent from the in-memory [`crate::Session`]:
/// it survives a page reload, the session does not. All operations are
/// synchronous (browser `localStorage` is synchronous) and infallible:
/// implementations degrade to "no token" rather than surfacing storage
/// errors.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory TokenStore for tests and the native fallback.
///
/// Clones share the same underlying slot, mirroring how `localStorage` is
/// global on the web platform.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let tokens = MemoryTokenStore::new();
        assert!(tokens.get().is_none());

        tokens.set("abc");
        assert_eq!(tokens.get().as_deref(), Some("abc"));

        tokens.set("def");
        assert_eq!(tokens.get().as_deref(), Some("def"));

        tokens.clear();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn clones_share_state() {
        let tokens = MemoryTokenStore::new();
        let other = tokens.clone();

        tokens.set("shared");
        assert_eq!(other.get().as_deref(), Some("shared"));

        other.clear();
        assert!(tokens.get().is_none());
    }
}
