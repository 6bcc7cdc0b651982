use crate::api::{ApiError, LeaveRequest, LeaveStatus};
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
};
use crate::pages::hr_dashboard::utils::duration_label;
use crate::utils::date::format_date_range;
use leptos::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub request_id: String,
    pub status: LeaveStatus,
    pub remarks: String,
}

fn reason_label(request: &LeaveRequest) -> String {
    match request.reason.trim() {
        "" => "-".to_string(),
        reason => reason.to_string(),
    }
}

#[component]
pub fn PendingRequestRow(
    request: LeaveRequest,
    disabled: Signal<bool>,
    on_decide: Callback<Decision>,
) -> impl IntoView {
    let remarks = create_rw_signal(String::new());
    let request_id = store_value(request.id.clone());
    let range = format_date_range(&request.start_date, &request.end_date);
    let days = duration_label(&request);
    let reason = reason_label(&request);
    let decide = move |status: LeaveStatus| {
        on_decide.call(Decision {
            request_id: request_id.get_value(),
            status,
            remarks: remarks.get_untracked(),
        });
    };

    view! {
        <tr>
            <td class="px-4 py-3">
                <div class="font-medium text-fg">{request.employee_name.clone()}</div>
                <div class="text-xs text-fg-muted">{format!("ID: {}", request.employee_id)}</div>
            </td>
            <td class="px-4 py-3">{request.leave_type.clone()}</td>
            <td class="px-4 py-3 text-sm">{range}</td>
            <td class="px-4 py-3 text-sm">{days}</td>
            <td class="px-4 py-3 text-sm">{reason}</td>
            <td class="px-4 py-3">
                <textarea
                    class="w-full border border-border rounded px-2 py-1 text-sm"
                    placeholder="Remarks"
                    prop:value=move || remarks.get()
                    on:input=move |ev| remarks.set(event_target_value(&ev))
                ></textarea>
            </td>
            <td class="px-4 py-3 space-x-2 whitespace-nowrap">
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-status-success-bg text-status-success-text disabled:opacity-50"
                    disabled=move || disabled.get()
                    on:click=move |_| decide(LeaveStatus::Approved)
                >
                    "Approve"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-status-error-bg text-status-error-text disabled:opacity-50"
                    disabled=move || disabled.get()
                    on:click=move |_| decide(LeaveStatus::Rejected)
                >
                    "Reject"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn PendingRequestsTable(
    requests: Signal<Vec<LeaveRequest>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    disabled: Signal<bool>,
    on_decide: Callback<Decision>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show
                when=move || !requests.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <Show when=move || !loading.get() && error.with(Option::is_none)>
                            <EmptyState title="No pending requests" />
                        </Show>
                    }
                }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr class="text-left text-xs uppercase text-fg-muted">
                            <th class="px-4 py-2">"Employee"</th>
                            <th class="px-4 py-2">"Type"</th>
                            <th class="px-4 py-2">"Dates"</th>
                            <th class="px-4 py-2">"Days"</th>
                            <th class="px-4 py-2">"Reason"</th>
                            <th class="px-4 py-2">"Remarks"</th>
                            <th class="px-4 py-2">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || requests.get()
                            key=|request| request.id.clone()
                            children=move |request: LeaveRequest| {
                                view! {
                                    <PendingRequestRow
                                        request=request
                                        disabled=disabled
                                        on_decide=on_decide
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn row_shows_request_details_and_actions() {
        let html = render_to_string(move || {
            let mut request = leave_request("r1", "2024-03-01", "2024-03-05", LeaveStatus::Pending);
            request.reason = String::new();
            let requests = vec![request];
            view! {
                <PendingRequestsTable
                    requests=Signal::derive(move || requests.clone())
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    disabled=Signal::derive(|| false)
                    on_decide=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("ID: E100"));
        assert!(html.contains("01-March-2024 to 05-March-2024"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
        assert!(!html.contains("No pending requests"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(move || {
            view! {
                <PendingRequestsTable
                    requests=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    disabled=Signal::derive(|| false)
                    on_decide=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No pending requests"));
    }

    #[test]
    fn load_error_replaces_placeholder() {
        let html = render_to_string(move || {
            view! {
                <PendingRequestsTable
                    requests=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| Some(ApiError::request_failed("Load failed")))
                    disabled=Signal::derive(|| false)
                    on_decide=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Load failed"));
        assert!(!html.contains("No pending requests"));
    }
}
