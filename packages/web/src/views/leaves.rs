//! Leave requests: status filter, the request table, the file-a-request form
//! for employees, and approve/reject for managers.

use std::collections::HashMap;

use api::models::{LeaveAssign, LeaveRequestCreate, LeaveStatus, LeaveType};
use chrono::NaiveDate;
use dioxus::prelude::*;
use session::UserRole;
use ui::use_session;

fn parse_status(value: &str) -> Option<LeaveStatus> {
    match value {
        "pending" => Some(LeaveStatus::Pending),
        "approved" => Some(LeaveStatus::Approved),
        "rejected" => Some(LeaveStatus::Rejected),
        _ => None,
    }
}

fn parse_leave_type(value: &str) -> Option<LeaveType> {
    match value {
        "vacation" => Some(LeaveType::Vacation),
        "sick_leave" => Some(LeaveType::SickLeave),
        _ => None,
    }
}

#[component]
pub fn LeaveRequests() -> Element {
    let state = use_session();
    let current = state();
    let can_manage = current.user().is_some_and(|u| u.can_manage());
    let is_employee = current
        .user()
        .is_some_and(|u| u.role == UserRole::Employee);

    let mut status_filter = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut requests = use_resource(move || async move {
        ui::api_client()
            .list_leave_requests(parse_status(&status_filter()))
            .await
            .map_err(|err| err.to_string())
    });
    // For resolving employee ids to names in the table; employees see only
    // their own requests, so the roster is only interesting to managers.
    let employees = use_resource(|| async {
        ui::api_client()
            .list_employees(None, None)
            .await
            .map_err(|err| err.to_string())
    });

    let mut new_type = use_signal(|| "vacation".to_string());
    let mut new_start = use_signal(String::new);
    let mut new_end = use_signal(String::new);

    // Manager-only assignment form
    let mut assign_employee = use_signal(String::new);
    let mut assign_type = use_signal(|| "vacation".to_string());
    let mut assign_start = use_signal(String::new);
    let mut assign_end = use_signal(String::new);

    let onassign = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let Some(leave_type) = parse_leave_type(&assign_type()) else {
                action_error.set(Some("Pick a leave type".to_string()));
                return;
            };
            let (Ok(start_date), Ok(end_date)) = (
                NaiveDate::parse_from_str(&assign_start(), "%Y-%m-%d"),
                NaiveDate::parse_from_str(&assign_end(), "%Y-%m-%d"),
            ) else {
                action_error.set(Some("Both dates are required".to_string()));
                return;
            };
            let employee_id = assign_employee();
            if employee_id.is_empty() {
                action_error.set(Some("Pick an employee".to_string()));
                return;
            }
            let assignment = LeaveAssign {
                employee_id,
                leave_type,
                start_date,
                end_date,
            };
            match ui::api_client().assign_leave(&assignment).await {
                Ok(_) => {
                    action_error.set(None);
                    assign_employee.set(String::new());
                    assign_start.set(String::new());
                    assign_end.set(String::new());
                    requests.restart();
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
        }
    };

    let onfile = move |event: FormEvent| {
        event.prevent_default();
        async move {
            let Some(leave_type) = parse_leave_type(&new_type()) else {
                action_error.set(Some("Pick a leave type".to_string()));
                return;
            };
            let (Ok(start_date), Ok(end_date)) = (
                NaiveDate::parse_from_str(&new_start(), "%Y-%m-%d"),
                NaiveDate::parse_from_str(&new_end(), "%Y-%m-%d"),
            ) else {
                action_error.set(Some("Both dates are required".to_string()));
                return;
            };
            if end_date < start_date {
                action_error.set(Some("Leave cannot end before it starts".to_string()));
                return;
            }
            let request = LeaveRequestCreate {
                leave_type,
                start_date,
                end_date,
            };
            match ui::api_client().create_leave_request(&request).await {
                Ok(_) => {
                    action_error.set(None);
                    new_start.set(String::new());
                    new_end.set(String::new());
                    requests.restart();
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
        }
    };

    let names: HashMap<String, String> = match employees() {
        Some(Ok(rows)) => rows
            .into_iter()
            .map(|e| {
                let name = e.display_name().to_string();
                (e.id, name)
            })
            .collect(),
        _ => HashMap::new(),
    };

    rsx! {
        div {
            class: "view",

            div {
                class: "view-header",
                h1 { "Leave requests" }
                select {
                    class: "filter",
                    value: "{status_filter}",
                    onchange: move |event| status_filter.set(event.value()),
                    option { value: "", "All statuses" }
                    option { value: "pending", "Pending" }
                    option { value: "approved", "Approved" }
                    option { value: "rejected", "Rejected" }
                }
            }

            if let Some(message) = action_error() {
                div { class: "form-error", "{message}" }
            }

            {match requests() {
                None => rsx! { p { class: "muted", "Loading leave requests..." } },
                Some(Err(err)) => rsx! { div { class: "form-error", "{err}" } },
                Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "muted", "No leave requests." } },
                Some(Ok(rows)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Employee" }
                                th { "Type" }
                                th { "From" }
                                th { "To" }
                                th { "Status" }
                                if can_manage { th { "" } }
                            }
                        }
                        tbody {
                            for request in rows {
                                tr {
                                    key: "{request.id}",
                                    td {
                                        {names.get(&request.employee_id).cloned().unwrap_or_else(|| request.employee_id.clone())}
                                    }
                                    td { "{request.leave_type.label()}" }
                                    td { "{request.start_date}" }
                                    td { "{request.end_date}" }
                                    td {
                                        span {
                                            class: "badge badge-{request.status.as_str()}",
                                            "{request.status.as_str()}"
                                        }
                                    }
                                    if can_manage {
                                        td {
                                            class: "row-actions",
                                            if request.status == LeaveStatus::Pending {
                                                button {
                                                    class: "btn btn-small",
                                                    onclick: {
                                                        let id = request.id.clone();
                                                        move |_| {
                                                            let id = id.clone();
                                                            async move {
                                                                match ui::api_client().set_leave_status(&id, LeaveStatus::Approved).await {
                                                                    Ok(_) => { action_error.set(None); requests.restart(); }
                                                                    Err(err) => action_error.set(Some(err.to_string())),
                                                                }
                                                            }
                                                        }
                                                    },
                                                    "Approve"
                                                }
                                                button {
                                                    class: "btn btn-small",
                                                    onclick: {
                                                        let id = request.id.clone();
                                                        move |_| {
                                                            let id = id.clone();
                                                            async move {
                                                                match ui::api_client().set_leave_status(&id, LeaveStatus::Rejected).await {
                                                                    Ok(_) => { action_error.set(None); requests.restart(); }
                                                                    Err(err) => action_error.set(Some(err.to_string())),
                                                                }
                                                            }
                                                        }
                                                    },
                                                    "Reject"
                                                }
                                            }
                                            button {
                                                class: "btn btn-danger btn-small",
                                                onclick: {
                                                    let id = request.id.clone();
                                                    move |_| {
                                                        let id = id.clone();
                                                        async move {
                                                            match ui::api_client().delete_leave_request(&id).await {
                                                                Ok(()) => { action_error.set(None); requests.restart(); }
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

            if is_employee {
                form {
                    class: "card inline-form",
                    onsubmit: onfile,
                    h2 { "Request leave" }

                    label { "Type" }
                    select {
                        value: "{new_type}",
                        onchange: move |event| new_type.set(event.value()),
                        option { value: "vacation", "Vacation" }
                        option { value: "sick_leave", "Sick leave" }
                    }

                    label { "First day" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{new_start}",
                        oninput: move |event| new_start.set(event.value()),
                    }

                    label { "Last day" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{new_end}",
                        oninput: move |event| new_end.set(event.value()),
                    }

                    button { class: "btn btn-primary", r#type: "submit", "Submit request" }
                }
            }

            if can_manage {
                form {
                    class: "card inline-form",
                    onsubmit: onassign,
                    h2 { "Assign leave" }

                    label { "Employee" }
                    select {
                        required: true,
                        value: "{assign_employee}",
                        onchange: move |event| assign_employee.set(event.value()),
                        option { value: "", "Select employee" }
                        if let Some(Ok(rows)) = employees() {
                            for employee in rows {
                                option { value: "{employee.id}", "{employee.display_name()}" }
                            }
                        }
                    }

                    label { "Type" }
                    select {
                        value: "{assign_type}",
                        onchange: move |event| assign_type.set(event.value()),
                        option { value: "vacation", "Vacation" }
                        option { value: "sick_leave", "Sick leave" }
                    }

                    label { "First day" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{assign_start}",
                        oninput: move |event| assign_start.set(event.value()),
                    }

                    label { "Last day" }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{assign_end}",
                        oninput: move |event| assign_end.set(event.value()),
                    }

                    button { class: "btn btn-primary", r#type: "submit", "Assign" }
                }
            }
        }
    }
}
