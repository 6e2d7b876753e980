//! Shared UI for the StaffDesk workspace: the session context, the app
//! shell's navbar, and the platform constructors that wire the session core
//! to browser storage and the API client.

mod auth;
pub use auth::{use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod platform;
pub use platform::{api_client, session_store, token_store};
