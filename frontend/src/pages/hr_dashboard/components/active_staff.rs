use crate::api::{ApiError, StaffSummary};
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;

fn flag(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[component]
pub fn ActiveStaffTable(
    staff: Signal<Vec<StaffSummary>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_history: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.with(Option::is_none) && staff.with(Vec::is_empty)>
                <EmptyState title="No active staff found." />
            </Show>
            <table class="min-w-full divide-y divide-border">
                <tbody class="divide-y divide-border">
                    <For
                        each=move || staff.get()
                        key=|member| member.id.clone()
                        children=move |member: StaffSummary| {
                            let id = store_value(member.id.clone());
                            let is_selected = move || selected.with(|s| s.as_deref() == Some(id.get_value().as_str()));
                            view! {
                                <tr class:bg-surface-muted=is_selected>
                                    <td class="px-4 py-3">
                                        <div class="font-medium text-fg">{member.name.clone()}</div>
                                        <div class="text-xs text-fg-muted">{format!("ID: {}", member.id)}</div>
                                    </td>
                                    <td class="px-4 py-3 text-sm">"Pending: "{flag(member.has_pending)}</td>
                                    <td class="px-4 py-3 text-sm">"Approved: "{flag(member.has_approved)}</td>
                                    <td class="px-4 py-3 text-sm">{member.month.clone()}</td>
                                    <td class="px-4 py-3">
                                        <button
                                            type="button"
                                            class="text-action-link hover:underline text-sm"
                                            on:click=move |_| on_history.call(id.get_value())
                                        >
                                            "History"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
