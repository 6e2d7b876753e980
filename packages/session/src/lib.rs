//! # Session core for StaffDesk
//!
//! Framework-free authentication state for the front-end: the in-memory
//! [`Session`], the [`SessionStore`] actions that drive it (bootstrap, login,
//! logout, current-user fetch), the [`TokenStore`] persistence seam for the
//! access token, and the pure navigation-guard policy in [`guard`].
//!
//! The UI layer owns the reactive copy of the session; everything in this
//! crate is plain data and async functions so it can be exercised directly in
//! tests.

pub mod guard;

mod store;
pub use store::{AuthApi, AuthError, Session, SessionStore};

mod token;
pub use token::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};

mod user;
pub use user::{UserInfo, UserRole};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebTokenStore;
