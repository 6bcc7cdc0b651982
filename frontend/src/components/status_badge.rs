use crate::api::LeaveStatus;
use leptos::*;

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Unknown => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold {}",
            status_badge_class(status)
        )>
            {status.as_str()}
        </span>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_shows_status_name() {
        let html = render_to_string(move || view! { <StatusBadge status=LeaveStatus::Rejected/> });
        assert!(html.contains("Rejected"));
        assert!(html.contains("status-error"));
    }
}
