use crate::token::TokenStore;
use crate::user::UserInfo;

/// Error surfaced by [`AuthApi`] implementations.
///
/// The session store collapses every current-user failure into "not logged
/// in"; only [`SessionStore::login`] forwards an error to its caller, so the
/// login form can tell rejected credentials from an unreachable backend.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("credentials were rejected")]
    Unauthorized,
    #[error("request failed: {0}")]
    Transport(String),
}

/// Remote authentication endpoints the session store depends on.
///
/// Implementations attach the persisted bearer token themselves (the token
/// store is shared), so the methods take no token argument.
pub trait AuthApi {
    /// Fetch the currently authenticated user.
    async fn current_user(&self) -> Result<UserInfo, AuthError>;

    /// Exchange form-encoded credentials for an access token string.
    async fn exchange_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError>;
}

/// In-memory authentication state.
///
/// Lives for the app's process lifetime and is reset on logout or a failed
/// fetch. `authenticated` is true iff the last current-user fetch succeeded;
/// a persisted token by itself proves nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserInfo>,
    pub authenticated: bool,
}

impl Session {
    /// The signed-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    fn for_user(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
        }
    }
}

/// Session actions over a token store and the remote auth API.
///
/// Methods return the resulting [`Session`] snapshot instead of mutating
/// shared state; the UI layer owns whatever reactive copy it needs. There is
/// no retry logic anywhere: one fetch, one verdict.
#[derive(Clone)]
pub struct SessionStore<T: TokenStore, A: AuthApi> {
    tokens: T,
    api: A,
}

impl<T: TokenStore, A: AuthApi> SessionStore<T, A> {
    pub fn new(tokens: T, api: A) -> Self {
        Self { tokens, api }
    }

    /// Whether a token is currently persisted. This is what the navigation
    /// guard keys on.
    pub fn token_present(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Bootstrap on app start: no persisted token means signed out, otherwise
    /// validate the token by fetching the current user.
    pub async fn init(&self) -> Session {
        if self.tokens.get().is_none() {
            return Session::anonymous();
        }
        self.fetch_user().await
    }

    /// Fetch the current user.
    ///
    /// Any failure clears the persisted token and yields the anonymous
    /// session; the error itself is never reported to the caller.
    pub async fn fetch_user(&self) -> Session {
        match self.api.current_user().await {
            Ok(user) => {
                tracing::debug!(user = %user.email, "session established");
                Session::for_user(user)
            }
            Err(err) => {
                tracing::warn!(%err, "current-user fetch failed, clearing persisted token");
                self.tokens.clear();
                Session::anonymous()
            }
        }
    }

    /// Exchange credentials for a token, persist it, then fetch the user.
    ///
    /// Only the credential exchange itself can error. A fetch failure after a
    /// successful exchange degrades to `Ok` with an anonymous session, per
    /// [`Self::fetch_user`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let token = self.api.exchange_credentials(email, password).await?;
        self.tokens.set(&token);
        Ok(self.fetch_user().await)
    }

    /// Drop the persisted token and reset the session. Synchronous.
    pub fn logout(&self) -> Session {
        self.tokens.clear();
        Session::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::token::MemoryTokenStore;
    use crate::user::UserRole;

    /// Scripted [`AuthApi`]: `user` is what the current-user endpoint
    /// returns, `token` what the credential exchange hands out; `None` means
    /// the call fails. Calls are recorded for ordering assertions.
    #[derive(Clone, Default)]
    struct FakeApi {
        user: Option<UserInfo>,
        token: Option<String>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AuthApi for FakeApi {
        async fn current_user(&self) -> Result<UserInfo, AuthError> {
            self.calls.lock().unwrap().push("current_user");
            self.user.clone().ok_or(AuthError::Unauthorized)
        }

        async fn exchange_credentials(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<String, AuthError> {
            self.calls.lock().unwrap().push("exchange");
            self.token.clone().ok_or(AuthError::Unauthorized)
        }
    }

    fn sample_user() -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            is_active: true,
            is_superuser: false,
            role: UserRole::Employee,
        }
    }

    #[tokio::test]
    async fn init_without_token_stays_anonymous() {
        let tokens = MemoryTokenStore::new();
        let api = FakeApi {
            user: Some(sample_user()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens, api.clone());

        let session = store.init().await;

        assert!(!session.authenticated);
        assert!(session.user.is_none());
        // No token means no network call at all.
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn init_with_valid_token_populates_user() {
        let tokens = MemoryTokenStore::new();
        tokens.set("persisted");
        let api = FakeApi {
            user: Some(sample_user()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens.clone(), api);

        let session = store.init().await;

        assert!(session.authenticated);
        assert_eq!(session.user, Some(sample_user()));
        assert_eq!(tokens.get().as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn fetch_failure_clears_user_and_token() {
        let tokens = MemoryTokenStore::new();
        tokens.set("stale");
        let api = FakeApi::default();
        let store = SessionStore::new(tokens.clone(), api);

        let session = store.init().await;

        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn login_stores_token_then_fetches_user() {
        let tokens = MemoryTokenStore::new();
        let api = FakeApi {
            user: Some(sample_user()),
            token: Some("fresh".to_string()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens.clone(), api.clone());

        let session = store.login("ada@example.com", "pw").await.unwrap();

        assert!(session.authenticated);
        assert_eq!(tokens.get().as_deref(), Some("fresh"));
        assert_eq!(api.calls(), vec!["exchange", "current_user"]);
    }

    #[tokio::test]
    async fn rejected_credentials_store_nothing() {
        let tokens = MemoryTokenStore::new();
        let api = FakeApi {
            user: Some(sample_user()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens.clone(), api.clone());

        let err = store.login("ada@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, AuthError::Unauthorized));
        assert!(tokens.get().is_none());
        assert_eq!(api.calls(), vec!["exchange"]);
    }

    #[tokio::test]
    async fn login_with_failing_user_fetch_degrades_to_anonymous() {
        let tokens = MemoryTokenStore::new();
        let api = FakeApi {
            token: Some("fresh".to_string()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens.clone(), api);

        // The exchange succeeded, so login itself is Ok, but the follow-up
        // fetch failed, which clears the token it just stored.
        let session = store.login("ada@example.com", "pw").await.unwrap();

        assert!(!session.authenticated);
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn logout_clears_token_and_session() {
        let tokens = MemoryTokenStore::new();
        tokens.set("t");
        let api = FakeApi {
            user: Some(sample_user()),
            ..FakeApi::default()
        };
        let store = SessionStore::new(tokens.clone(), api);

        let session = store.logout();

        assert_eq!(session, Session::anonymous());
        assert!(tokens.get().is_none());
        assert!(!store.token_present());
    }
}
