//! Session context and hooks for the UI.

use dioxus::prelude::*;
use session::{Session, UserInfo};

/// Reactive session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// True until the startup [`session::SessionStore::init`] has settled.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::anonymous(),
            loading: true,
        }
    }
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        self.session.user.as_ref()
    }

    pub fn authenticated(&self) -> bool {
        self.session.authenticated
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that bootstraps the session.
/// Wrap the app with this component before rendering the router.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Validate any persisted token on mount
    let _ = use_resource(move || async move {
        let session = crate::session_store().init().await;
        tracing::debug!(
            authenticated = session.authenticated,
            "session bootstrap settled"
        );
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button that ends the session and returns the browser to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| {
        let session = crate::session_store().logout();
        state.set(SessionState {
            session,
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
