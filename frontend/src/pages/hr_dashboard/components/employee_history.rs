use crate::api::{ApiError, LeaveRequest};
use crate::components::{
    error::InlineErrorMessage,
    layout::{ErrorMessage, LoadingSpinner},
    status_badge::StatusBadge,
};
use crate::pages::hr_dashboard::utils::HistoryYear;
use crate::utils::date::{format_date_range, format_display_date};
use leptos::*;

#[component]
fn HistoryEntry(request: LeaveRequest) -> impl IntoView {
    let range = format_date_range(&request.start_date, &request.end_date);
    let requested = format_display_date(request.timestamp.as_deref().unwrap_or_default());
    let remarks = request.remarks_text().map(str::to_string);
    view! {
        <li class="py-3 space-y-1 text-sm">
            <div class="flex items-center justify-between">
                <span class="font-medium text-fg">{request.leave_type.clone()}</span>
                <StatusBadge status=request.status />
            </div>
            <div class="text-fg-muted">"Dates: "{range}</div>
            <div class="text-fg-muted">"Requested: "{requested}</div>
            {remarks.map(|remarks| view! { <div class="text-fg-muted">"Remarks: "{remarks}</div> })}
        </li>
    }
}

#[component]
pub fn EmployeeHistoryResults(
    groups: Signal<Vec<HistoryYear>>,
    loading: Signal<bool>,
    searched: Signal<bool>,
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || searched.get() && !loading.get() && error.with(Option::is_none) && groups.with(Vec::is_empty)>
                <p class="text-sm text-fg-muted">"No history found for this employee."</p>
            </Show>
            <For
                each=move || groups.get()
                key=|group| group.year
                children=move |group: HistoryYear| {
                    view! {
                        <section>
                            <h4 class="text-md font-semibold text-fg">{group.label()}</h4>
                            <ul class="divide-y divide-border">
                                {group
                                    .requests
                                    .into_iter()
                                    .map(|request| view! { <HistoryEntry request=request /> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn EmployeeHistorySearch(
    input: RwSignal<String>,
    validation_error: Signal<Option<ApiError>>,
    on_search: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="flex items-end gap-3"
            on:submit=move |ev| {
                ev.prevent_default();
                on_search.call(());
            }
        >
            <div class="flex-1">
                <label for="history-employee-id" class="block text-sm font-medium text-fg-muted">
                    "Employee ID"
                </label>
                <input
                    id="history-employee-id"
                    type="text"
                    class="mt-1 w-full border border-border rounded px-3 py-2"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
            >
                "Search"
            </button>
        </form>
        <InlineErrorMessage error=validation_error />
    }
}
