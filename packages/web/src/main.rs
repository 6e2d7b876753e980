use dioxus::prelude::*;

use session::guard::{self, GuardOutcome};
use session::TokenStore;
use ui::SessionProvider;
use views::{Admin, Departments, Employees, Home, LeaveRequests, Login, NotFound, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/login")]
        Login {},
        #[layout(Shell)]
            #[route("/")]
            Home {},
            #[route("/admin")]
            Admin {},
            #[route("/settings")]
            Settings {},
            #[route("/employees")]
            Employees {},
            #[route("/departments")]
            Departments {},
            #[route("/leaves")]
            LeaveRequests {},
            #[route("/:..segments")]
            NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Pre-navigation gate. Every route renders through this layout, which
/// re-evaluates the token-presence policy for the target path and rewrites
/// the navigation when the target is not allowed.
#[component]
fn Guard() -> Element {
    let route: Route = use_route();
    let nav = use_navigator();

    let token_present = ui::token_store().get().is_some();
    match guard::evaluate(&route.to_string(), token_present) {
        GuardOutcome::Allow => rsx! {
            Outlet::<Route> {}
        },
        GuardOutcome::ToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::ToHome => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}

/// App chrome for everything behind the guard: section links, the signed-in
/// user badge, and the routed content.
#[component]
fn Shell() -> Element {
    let state = ui::use_session();
    let current = state();
    let user = current.user().cloned();
    let is_admin = user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        ui::Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "StaffDesk" }
            Link { class: "nav-link", to: Route::Employees {}, "Employees" }
            Link { class: "nav-link", to: Route::Departments {}, "Departments" }
            Link { class: "nav-link", to: Route::LeaveRequests {}, "Leave" }
            Link { class: "nav-link", to: Route::Settings {}, "Settings" }
            if is_admin {
                Link { class: "nav-link", to: Route::Admin {}, "Admin" }
            }
            div { class: "nav-spacer" }
            if let Some(user) = user {
                span { class: "nav-user", "{user.display_name()}" }
            }
            ui::LogoutButton { class: "nav-logout" }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
