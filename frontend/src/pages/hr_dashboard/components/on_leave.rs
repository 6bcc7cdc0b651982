use crate::api::{ApiError, StaffSummary};
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
};
use crate::utils::date::format_date_range;
use leptos::*;

fn leave_window(member: &StaffSummary) -> String {
    format_date_range(
        member.start_date.as_deref().unwrap_or_default(),
        member.end_date.as_deref().unwrap_or_default(),
    )
}

#[component]
pub fn OnLeaveList(
    staff: Signal<Vec<StaffSummary>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.with(Option::is_none) && staff.with(Vec::is_empty)>
                <EmptyState title="Nobody is on leave right now." />
            </Show>
            <ul class="divide-y divide-border">
                <For
                    each=move || staff.get()
                    key=|member| member.id.clone()
                    children=move |member: StaffSummary| {
                        let window = leave_window(&member);
                        view! {
                            <li class="px-4 py-3 flex items-center justify-between">
                                <div>
                                    <div class="font-medium text-fg">{member.name.clone()}</div>
                                    <div class="text-xs text-fg-muted">{format!("ID: {}", member.id)}</div>
                                </div>
                                <div class="text-sm text-right">
                                    <div>{member.leave_type.clone().unwrap_or_default()}</div>
                                    <div class="text-fg-muted">{window}</div>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
