//! Profile and password settings for the signed-in user.

use api::models::{UpdatePassword, UserUpdateMe};
use dioxus::prelude::*;
use session::Session;
use ui::{use_session, SessionState};

#[component]
pub fn Settings() -> Element {
    let mut state = use_session();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut profile_status = use_signal(|| Option::<String>::None);
    let mut profile_error = use_signal(|| Option::<String>::None);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut password_status = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);

    // Seed the profile form from the session once it is available.
    use_effect(move || {
        let current = state();
        if let Some(user) = current.user() {
            full_name.set(user.full_name.clone().unwrap_or_default());
            email.set(user.email.clone());
        }
    });

    let onsave_profile = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let name = full_name();
            let update = UserUpdateMe {
                full_name: (!name.trim().is_empty()).then(|| name.trim().to_string()),
                email: Some(email().trim().to_string()),
            };
            match ui::api_client().update_me(&update).await {
                Ok(user) => {
                    profile_error.set(None);
                    profile_status.set(Some("Profile saved".to_string()));
                    // Keep the reactive session in step with the backend.
                    state.set(SessionState {
                        session: Session {
                            user: Some(user),
                            authenticated: true,
                        },
                        loading: false,
                    });
                }
                Err(err) => {
                    profile_status.set(None);
                    profile_error.set(Some(err.to_string()));
                }
            }
        }
    };

    let onchange_password = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let update = UpdatePassword {
                current_password: current_password(),
                new_password: new_password(),
            };
            match ui::api_client().update_my_password(&update).await {
                Ok(message) => {
                    password_error.set(None);
                    password_status.set(Some(message.message));
                    current_password.set(String::new());
                    new_password.set(String::new());
                }
                Err(err) => {
                    password_status.set(None);
                    password_error.set(Some(err.to_string()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "view",

            div {
                class: "view-header",
                h1 { "Settings" }
            }

            form {
                class: "card inline-form",
                onsubmit: onsave_profile,
                h2 { "Profile" }

                label { "Full name" }
                input {
                    value: "{full_name}",
                    oninput: move |event| full_name.set(event.value()),
                }

                label { "Email" }
                input {
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }

                button { class: "btn btn-primary", r#type: "submit", "Save" }

                if let Some(message) = profile_status() {
                    div { class: "form-status", "{message}" }
                }
                if let Some(message) = profile_error() {
                    div { class: "form-error", "{message}" }
                }
            }

            form {
                class: "card inline-form",
                onsubmit: onchange_password,
                h2 { "Change password" }

                label { "Current password" }
                input {
                    r#type: "password",
                    required: true,
                    value: "{current_password}",
                    oninput: move |event| current_password.set(event.value()),
                }

                label { "New password" }
                input {
                    r#type: "password",
                    required: true,
                    minlength: 8,
                    value: "{new_password}",
                    oninput: move |event| new_password.set(event.value()),
                }

                button { class: "btn btn-primary", r#type: "submit", "Update password" }

                if let Some(message) = password_status() {
                    div { class: "form-status", "{message}" }
                }
                if let Some(message) = password_error() {
                    div { class: "form-error", "{message}" }
                }
            }
        }
    }
}
