pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HrLoginPanel;

use leptos::*;

#[component]
pub fn HrLoginPage() -> impl IntoView {
    view! { <HrLoginPanel /> }
}
