use crate::api::LeaveRequest;
use crate::components::status_badge::StatusBadge;
use crate::pages::status::utils::can_resubmit;
use crate::utils::date::format_date_range;
use leptos::*;

#[component]
pub fn RequestItem(request: LeaveRequest, on_resubmit: Callback<LeaveRequest>) -> impl IntoView {
    let range = format_date_range(&request.start_date, &request.end_date);
    let remarks = request.remarks_text().map(str::to_string);
    let resubmittable = can_resubmit(&request);
    let status = request.status;
    let target = store_value(request.clone());

    view! {
        <li class="px-6 py-4 space-y-1">
            <div class="flex items-center justify-between">
                <span class="font-medium text-fg">{request.leave_type.clone()}</span>
                <StatusBadge status=status />
            </div>
            <div class="text-sm text-fg-muted">{range}</div>
            <div class="text-sm text-fg">{request.reason.clone()}</div>
            {remarks.map(|remarks| view! {
                <div class="text-sm text-fg-muted">"Remarks: "{remarks}</div>
            })}
            <Show when=move || resubmittable>
                <button
                    type="button"
                    class="mt-2 px-3 py-1 rounded text-sm bg-action-primary-bg text-action-primary-text"
                    on:click=move |_| on_resubmit.call(target.get_value())
                >
                    "Resubmit"
                </button>
            </Show>
        </li>
    }
}

#[component]
pub fn RequestList(
    #[prop(into)] requests: Signal<Vec<LeaveRequest>>,
    on_resubmit: Callback<LeaveRequest>,
) -> impl IntoView {
    view! {
        <ul class="divide-y divide-border">
            <For
                each=move || requests.get()
                key=|request| (request.id.clone(), request.status)
                children=move |request: LeaveRequest| {
                    view! { <RequestItem request=request on_resubmit=on_resubmit /> }
                }
            />
        </ul>
    }
}
