//! Browser `localStorage` token persistence.
//!
//! Compiled only for the web platform (`wasm32` + `web` feature). Storage
//! failures are swallowed: a blocked or unavailable `localStorage` degrades
//! to "no token persisted" rather than crashing the app, which the session
//! store then treats as signed out.

use crate::token::{TokenStore, ACCESS_TOKEN_KEY};

/// `localStorage`-backed token store.
///
/// Zero-size and `Clone`-friendly: every operation looks the storage up
/// fresh, since the browser owns the single global instance anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebTokenStore;

impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for WebTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
