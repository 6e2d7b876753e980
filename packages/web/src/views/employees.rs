//! Employee directory: department filter, the roster table, and the hire
//! form for managers.

use api::models::{EmployeeCreate, EmployeeUpdate};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Employees() -> Element {
    let state = use_session();
    let current = state();
    let can_manage = current.user().is_some_and(|u| u.can_manage());

    let mut department_filter = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut employees = use_resource(move || async move {
        let filter = department_filter();
        let department = (!filter.is_empty()).then_some(filter);
        ui::api_client()
            .list_employees(department.as_deref(), None)
            .await
            .map_err(|err| err.to_string())
    });
    let departments = use_resource(|| async {
        ui::api_client()
            .list_departments()
            .await
            .map_err(|err| err.to_string())
    });

    // Hire form state
    let mut new_user_id = use_signal(String::new);
    let mut new_department = use_signal(String::new);
    let mut new_position = use_signal(String::new);
    let mut new_hire_date = use_signal(String::new);
    let mut new_phone = use_signal(String::new);
    let mut new_salary = use_signal(String::new);

    let onhire = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let Ok(hire_date) = NaiveDate::parse_from_str(&new_hire_date(), "%Y-%m-%d") else {
                action_error.set(Some("Hire date must be a valid date".to_string()));
                return;
            };
            let salary = new_salary().trim().parse::<f64>().ok();
            let phone = new_phone();
            let employee = EmployeeCreate {
                user_id: new_user_id().trim().to_string(),
                department_id: new_department(),
                position: new_position().trim().to_string(),
                hire_date,
                phone: (!phone.trim().is_empty()).then(|| phone.trim().to_string()),
                salary,
            };
            match ui::api_client().create_employee(&employee).await {
                Ok(_) => {
                    action_error.set(None);
                    new_user_id.set(String::new());
                    new_position.set(String::new());
                    new_hire_date.set(String::new());
                    new_phone.set(String::new());
                    new_salary.set(String::new());
                    employees.restart();
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
                h1 { "Employees" }
                if let Some(Ok(departments)) = departments() {
                    select {
                        class: "filter",
                        value: "{department_filter}",
                        onchange: move |event| department_filter.set(event.value()),
                        option { value: "", "All departments" }
                        for department in departments {
                            option { value: "{department.id}", "{department.name}" }
                        }
                    }
                }
            }

            if let Some(message) = action_error() {
                div { class: "form-error", "{message}" }
            }

            {match employees() {
                None => rsx! { p { class: "muted", "Loading employees..." } },
                Some(Err(err)) => rsx! { div { class: "form-error", "{err}" } },
                Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "muted", "No employees found." } },
                Some(Ok(rows)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Position" }
                                th { "Hired" }
                                th { "Phone" }
                                th { "Status" }
                                if can_manage { th { "" } }
                            }
                        }
                        tbody {
                            for employee in rows {
                                tr {
                                    key: "{employee.id}",
                                    td { "{employee.display_name()}" }
                                    td { "{employee.position}" }
                                    td { "{employee.hire_date}" }
                                    td { {employee.phone.clone().unwrap_or_else(|| "-".to_string())} }
                                    td {
                                        span {
                                            class: if employee.is_active { "badge badge-active" } else { "badge badge-inactive" },
                                            if employee.is_active { "Active" } else { "Terminated" }
                                        }
                                    }
                                    if can_manage {
                                        td {
                                            if employee.is_active {
                                                button {
                                                    class: "btn btn-danger btn-small",
                                                    onclick: {
                                                        let id = employee.id.clone();
                                                        move |_| {
                                                            let id = id.clone();
                                                            async move {
                                                                match ui::api_client().terminate_employee(&id).await {
                                                                    Ok(()) => {
                                                                        action_error.set(None);
                                                                        employees.restart();
                                                                    }
                                                                    Err(err) => action_error.set(Some(err.to_string())),
                                                                }
                                                            }
                                                        }
                                                    },
                                                    "Terminate"
                                                }
                                            } else {
                                                button {
                                                    class: "btn btn-small",
                                                    onclick: {
                                                        let id = employee.id.clone();
                                                        move |_| {
                                                            let id = id.clone();
                                                            async move {
                                                                let update = EmployeeUpdate {
                                                                    is_active: Some(true),
                                                                    ..EmployeeUpdate::default()
                                                                };
                                                                match ui::api_client().update_employee(&id, &update).await {
                                                                    Ok(_) => {
                                                                        action_error.set(None);
                                                                        employees.restart();
                                                                    }
                                                                    Err(err) => action_error.set(Some(err.to_string())),
                                                                }
                                                            }
                                                        }
                                                    },
                                                    "Reactivate"
                                                }
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
                    onsubmit: onhire,
                    h2 { "Hire employee" }

                    label { "User id" }
                    input {
                        required: true,
                        value: "{new_user_id}",
                        oninput: move |event| new_user_id.set(event.value()),
                    }

                    label { "Department" }
                    select {
                        required: true,
                        value: "{new_department}",
                        onchange: move |event| new_department.set(event.value()),
                        option { value: "", "Select department" }
                        if let Some(Ok(departments)) = departments() {
                            for department in departments {
                                option { value: "{department.id}", "{department.name}" }
                            }
                        }
                    }

                    label { "Position" }
                    input {
                        required: true,
                        value: "{new_position}",
                        oninput: move |event| new_position.set(event.value()),
                    }

                    label { "Hire date" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{new_hire_date}",
                        oninput: move |event| new_hire_date.set(event.value()),
                    }

                    label { "Phone" }
                    input {
                        value: "{new_phone}",
                        oninput: move |event| new_phone.set(event.value()),
                    }

                    label { "Salary" }
                    input {
                        r#type: "number",
                        value: "{new_salary}",
                        oninput: move |event| new_salary.set(event.value()),
                    }

                    button { class: "btn btn-primary", r#type: "submit", "Hire" }
                }
            }
        }
    }
}
