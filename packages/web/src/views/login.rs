//! Login page with the email/password form.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut state = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        async move {
            busy.set(true);
            error.set(None);
            match ui::session_store().login(&email(), &password()).await {
                Ok(session) => {
                    let authenticated = session.authenticated;
                    state.set(SessionState {
                        session,
                        loading: false,
                    });
                    if authenticated {
                        nav.replace(Route::Home {});
                    } else {
                        // Exchange worked but the profile fetch did not; the
                        // token has already been cleared again.
                        error.set(Some(
                            "Signed in, but your profile could not be loaded. Try again.".to_string(),
                        ));
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "StaffDesk" }
            p { class: "login-subtitle", "Sign in with your company account" }

            form {
                class: "login-form",
                onsubmit: onsubmit,

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    autofocus: true,
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
        }
    }
}
