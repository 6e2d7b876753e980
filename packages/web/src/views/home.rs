//! Landing dashboard: greeting, the caller's own employee record, and quick
//! links into the sections.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let state = use_session();
    let current = state();
    let user = current.user().cloned();

    // The employee record backing this account, when one exists (admins and
    // managers often have none).
    let record = use_resource(|| async {
        let client = ui::api_client();
        let employee = client.my_employee().await.ok()?;
        let department = client.get_department(&employee.department_id).await.ok();
        Some((employee, department))
    });

    rsx! {
        div {
            class: "home",

            if let Some(user) = user {
                h1 { "Welcome, {user.display_name()}" }
            } else if current.loading {
                h1 { "Welcome" }
            }

            if let Some(Some((employee, department))) = record() {
                div {
                    class: "card my-record",
                    h2 { "Your record" }
                    dl {
                        dt { "Position" }
                        dd { "{employee.position}" }
                        dt { "Department" }
                        dd {
                            if let Some(department) = department {
                                "{department.name}"
                            } else {
                                "{employee.department_id}"
                            }
                        }
                        dt { "Hired" }
                        dd { "{employee.hire_date}" }
                    }
                }
            }

            section {
                class: "quick-links",
                Link { class: "card quick-link", to: Route::Employees {},
                    h3 { "Employees" }
                    p { "Directory and hiring" }
                }
                Link { class: "card quick-link", to: Route::Departments {},
                    h3 { "Departments" }
                    p { "Teams and their managers" }
                }
                Link { class: "card quick-link", to: Route::LeaveRequests {},
                    h3 { "Leave" }
                    p { "Vacation and sick leave" }
                }
                Link { class: "card quick-link", to: Route::Settings {},
                    h3 { "Settings" }
                    p { "Profile and password" }
                }
            }
        }
    }
}
