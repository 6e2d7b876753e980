//! User administration: account listing and creation. Admin-only; managers
//! can create employee accounts in their own departments, which the backend
//! enforces.

use api::models::UserCreate;
use dioxus::prelude::*;
use session::UserRole;
use ui::use_session;

fn parse_role(value: &str) -> UserRole {
    match value {
        "admin" => UserRole::Admin,
        "manager" => UserRole::Manager,
        _ => UserRole::Employee,
    }
}

#[component]
pub fn Admin() -> Element {
    let state = use_session();
    let current = state();
    let can_view = current.user().is_some_and(|u| u.can_manage());

    let mut action_error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let mut users = use_resource(|| async {
        ui::api_client()
            .list_users(0, 100)
            .await
            .map_err(|err| err.to_string())
    });
    let departments = use_resource(|| async {
        ui::api_client()
            .list_departments()
            .await
            .map_err(|err| err.to_string())
    });

    let mut new_email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut new_full_name = use_signal(String::new);
    let mut new_role = use_signal(|| "employee".to_string());
    let mut new_department = use_signal(String::new);

    let oncreate = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let full_name = new_full_name();
            let department = new_department();
            let user = UserCreate {
                email: new_email().trim().to_string(),
                password: new_password(),
                full_name: (!full_name.trim().is_empty()).then(|| full_name.trim().to_string()),
                role: parse_role(&new_role()),
                department_id: (!department.is_empty()).then_some(department),
            };
            match ui::api_client().create_user(&user).await {
                Ok(created) => {
                    action_error.set(None);
                    status.set(Some(format!("Created account for {}", created.email)));
                    new_email.set(String::new());
                    new_password.set(String::new());
                    new_full_name.set(String::new());
                    users.restart();
                }
                Err(err) => {
                    status.set(None);
                    action_error.set(Some(err.to_string()));
                }
            }
        }
    };

    if !can_view {
        return rsx! {
            div {
                class: "view",
                div { class: "card denied",
                    h1 { "Administration" }
                    p { "Your account does not have access to this section." }
                }
            }
        };
    }

    rsx! {
        div {
            class: "view",

            div {
                class: "view-header",
                h1 { "Administration" }
            }

            if let Some(message) = status() {
                div { class: "form-status", "{message}" }
            }
            if let Some(message) = action_error() {
                div { class: "form-error", "{message}" }
            }

            {match users() {
                None => rsx! { p { class: "muted", "Loading accounts..." } },
                Some(Err(err)) => rsx! { div { class: "form-error", "{err}" } },
                Some(Ok(page)) => rsx! {
                    p { class: "muted", "{page.count} accounts" }
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Email" }
                                th { "Name" }
                                th { "Role" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for user in page.data {
                                tr {
                                    key: "{user.id}",
                                    td { "{user.email}" }
                                    td { {user.full_name.clone().unwrap_or_else(|| "-".to_string())} }
                                    td {
                                        "{user.role:?}"
                                        if user.is_superuser { " (superuser)" }
                                    }
                                    td {
                                        span {
                                            class: if user.is_active { "badge badge-active" } else { "badge badge-inactive" },
                                            if user.is_active { "Active" } else { "Disabled" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            form {
                class: "card inline-form",
                onsubmit: oncreate,
                h2 { "New account" }

                label { "Email" }
                input {
                    r#type: "email",
                    required: true,
                    value: "{new_email}",
                    oninput: move |event| new_email.set(event.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    required: true,
                    minlength: 8,
                    value: "{new_password}",
                    oninput: move |event| new_password.set(event.value()),
                }

                label { "Full name" }
                input {
                    value: "{new_full_name}",
                    oninput: move |event| new_full_name.set(event.value()),
                }

                label { "Role" }
                select {
                    value: "{new_role}",
                    onchange: move |event| new_role.set(event.value()),
                    option { value: "employee", "Employee" }
                    option { value: "manager", "Manager" }
                    option { value: "admin", "Admin" }
                }

                label { "Department" }
                select {
                    value: "{new_department}",
                    onchange: move |event| new_department.set(event.value()),
                    option { value: "", "None" }
                    if let Some(Ok(departments)) = departments() {
                        for department in departments {
                            option { value: "{department.id}", "{department.name}" }
                        }
                    }
                }

                button { class: "btn btn-primary", r#type: "submit", "Create account" }
            }
        }
    }
}
