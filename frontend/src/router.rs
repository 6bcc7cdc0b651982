use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireEmployee, RequireHr},
        layout::Layout,
    },
    pages::{EmployeeLoginPage, HrDashboardPage, HrLoginPage, LeaveRequestPage, StatusPage},
    state::session::{use_session, Screen, SessionProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/hr/login", "/request", "/status", "/hr"];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &["/request", "/status"];

pub const HR_ROUTE_PATHS: &[&str] = &["/hr"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="Leave Desk"/>
        <SessionProvider>
            <Router>
                <SessionRouteSync/>
                <Routes>
                    <Route path="/" view=EmployeeLoginPage/>
                    <Route path="/hr/login" view=HrLoginPage/>
                    <Route path="/request" view=EmployeeRequestForm/>
                    <Route path="/status" view=EmployeeStatus/>
                    <Route path="/hr" view=HrDashboard/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

/// Path to visit so the URL shows `screen`, or `None` when it already does.
fn navigation_target(screen: Screen, current_path: &str) -> Option<&'static str> {
    let target = screen.path();
    (current_path != target).then_some(target)
}

/// Keeps the URL in step with the screen held in the session. Every session
/// update is checked against the current location, not the previous screen.
#[component]
fn SessionRouteSync() -> impl IntoView {
    let (session, _) = use_session();
    let location = use_location();
    let navigate = use_navigate();
    create_effect(move |subscribed: Option<()>| {
        let screen = session.with(|s| s.screen);
        // first run only subscribes; the URL the page was loaded with stays
        if subscribed.is_none() {
            return;
        }
        let current = location.pathname.get_untracked();
        if let Some(path) = navigation_target(screen, &current) {
            log::debug!("navigating from {} to {}", current, path);
            navigate(path, Default::default());
        }
    });
}

#[component]
fn EmployeeRequestForm() -> impl IntoView {
    view! { <RequireEmployee><Layout><LeaveRequestPage/></Layout></RequireEmployee> }
}

#[component]
fn EmployeeStatus() -> impl IntoView {
    view! { <RequireEmployee><Layout><StatusPage/></Layout></RequireEmployee> }
}

#[component]
fn HrDashboard() -> impl IntoView {
    view! { <RequireHr><Layout><HrDashboardPage/></Layout></RequireHr> }
}
