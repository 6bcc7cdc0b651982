pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::EmployeeLoginPanel;

use leptos::*;

#[component]
pub fn EmployeeLoginPage() -> impl IntoView {
    view! { <EmployeeLoginPanel /> }
}
