//! Department list with create, rename, and delete for managers.

use api::models::{DepartmentCreate, DepartmentUpdate};
use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Departments() -> Element {
    let state = use_session();
    let current = state();
    let can_manage = current.user().is_some_and(|u| u.can_manage());

    let mut action_error = use_signal(|| Option::<String>::None);
    let mut departments = use_resource(|| async {
        ui::api_client()
            .list_departments()
            .await
            .map_err(|err| err.to_string())
    });

    let mut new_name = use_signal(String::new);
    let mut new_description = use_signal(String::new);
    // Id of the department being edited; None means the form creates.
    let mut editing = use_signal(|| Option::<String>::None);

    let onsave = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let description = new_description();
            let description =
                (!description.trim().is_empty()).then(|| description.trim().to_string());
            let name = new_name().trim().to_string();

            let result = match editing() {
                Some(id) => {
                    let update = DepartmentUpdate {
                        name: Some(name),
                        description,
                    };
                    ui::api_client().update_department(&id, &update).await
                }
                None => {
                    let department = DepartmentCreate {
                        name,
                        description,
                        // The backend defaults the manager to the caller.
                        manager_id: None,
                    };
                    ui::api_client().create_department(&department).await
                }
            };

            match result {
                Ok(_) => {
                    action_error.set(None);
                    editing.set(None);
                    new_name.set(String::new());
                    new_description.set(String::new());
                    departments.restart();
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
        }
    };

    rsx! {
        div {
            class: "view",

            div {
                class: "view-header",
                h1 { "Departments" }
            }

            if let Some(message) = action_error() {
                div { class: "form-error", "{message}" }
            }

            {match departments() {
                None => rsx! { p { class: "muted", "Loading departments..." } },
                Some(Err(err)) => rsx! { div { class: "form-error", "{err}" } },
                Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "muted", "No departments yet." } },
                Some(Ok(rows)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th { "Manager" }
                                if can_manage { th { "" } }
                            }
                        }
                        tbody {
                            for department in rows {
                                tr {
                                    key: "{department.id}",
                                    td { "{department.name}" }
                                    td { {department.description.clone().unwrap_or_else(|| "-".to_string())} }
                                    td { "{department.manager_id}" }
                                    if can_manage {
                                        td {
                                            class: "row-actions",
                                            button {
                                                class: "btn btn-small",
                                                onclick: {
                                                    let id = department.id.clone();
                                                    let name = department.name.clone();
                                                    let description = department.description.clone();
                                                    move |_| {
                                                        editing.set(Some(id.clone()));
                                                        new_name.set(name.clone());
                                                        new_description.set(description.clone().unwrap_or_default());
                                                    }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-small",
                                                onclick: {
                                                    let id = department.id.clone();
                                                    move |_| {
                                                        let id = id.clone();
                                                        async move {
                                                            match ui::api_client().delete_department(&id).await {
                                                                Ok(()) => {
                                                                    action_error.set(None);
                                                                    departments.restart();
                                                                }
                                                                Err(err) => action_error.set(Some(err.to_string())),
                                                            }
                                                        }
                                                    }
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            if can_manage {
                form {
                    class: "card inline-form",
                    onsubmit: onsave,
                    h2 { if editing().is_some() { "Edit department" } else { "New department" } }

                    label { "Name" }
                    input {
                        required: true,
                        value: "{new_name}",
                        oninput: move |event| new_name.set(event.value()),
                    }

                    label { "Description" }
                    input {
                        value: "{new_description}",
                        oninput: move |event| new_description.set(event.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        if editing().is_some() { "Save" } else { "Create" }
                    }
                    if editing().is_some() {
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| {
                                editing.set(None);
                                new_name.set(String::new());
                                new_description.set(String::new());
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
