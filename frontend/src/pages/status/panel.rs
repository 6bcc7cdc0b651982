use super::{components::request_list::RequestList, view_model::use_status_view_model};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
};
use crate::pages::vacation_history::VacationHistoryPanel;
use leptos::*;

#[component]
pub fn StatusPage() -> impl IntoView {
    let vm = use_status_view_model();
    let loading = vm.requests_resource.loading();
    let parts = vm.partitioned();
    let error = vm.error();
    let current = Signal::derive(move || parts.get().current);
    let older = Signal::derive(move || parts.get().older);
    let older_count = move || parts.with(|p| p.older.len());
    let is_empty = move || {
        !loading.get() && error.with(Option::is_none) && vm.requests_resource.get().is_some() && parts.with(|p| p.is_empty())
    };
    let on_resubmit = Callback::new(move |request| vm.request_resubmit(request));
    let show_older = vm.show_older;
    let show_history = vm.show_history;
    let message = vm.message;

    view! {
        <div class="max-w-4xl mx-auto space-y-6 px-4">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"My leave requests"</h2>
                <button
                    type="button"
                    class="text-action-link hover:underline text-sm"
                    on:click=move |_| vm.show_request_form()
                >
                    "New request"
                </button>
            </div>
            {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=is_empty>
                <EmptyState title="No leave requests found." />
            </Show>
            <div class="bg-surface-elevated shadow rounded-lg">
                <RequestList requests=current on_resubmit=on_resubmit />
                <Show when=move || { !show_older.get() && older_count() > 0 }>
                    <div class="px-6 py-3 border-t border-border">
                        <button
                            type="button"
                            class="text-action-link hover:underline text-sm"
                            on:click=move |_| vm.reveal_older()
                        >
                            {move || format!("Show older requests ({})", older_count())}
                        </button>
                    </div>
                </Show>
                <Show when=move || show_older.get()>
                    <RequestList requests=older on_resubmit=on_resubmit />
                </Show>
            </div>
            <div>
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-surface-muted text-fg text-sm"
                    on:click=move |_| vm.toggle_history()
                >
                    {move || if show_history.get() { "Hide vacation history" } else { "My vacation history" }}
                </button>
            </div>
            <VacationHistoryPanel employee_id=vm.history_employee_id() title="My vacation history" />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.confirm_target.with(Option::is_some))
                title="Resubmit request"
                message=Signal::derive(move || {
                    vm.confirm_target
                        .get()
                        .map(|r| format!("Send your {} leave request back to HR for review?", r.leave_type))
                        .unwrap_or_default()
                })
                confirm_label="Resubmit"
                confirm_disabled=Signal::derive(move || vm.resubmit_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_resubmit())
                on_cancel=Callback::new(move |_| vm.cancel_resubmit())
            />
        </div>
    }
}
