use super::{components::leave_form::LeaveForm, view_model::use_leave_request_view_model};
use leptos::*;

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let vm = use_leave_request_view_model();
    let pending = vm.submit_action.pending();
    let employee = vm.employee;

    view! {
        <div class="max-w-3xl mx-auto space-y-6 px-4">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold text-fg">
                        {move || employee.get().map(|e| format!("Welcome, {}", e.name)).unwrap_or_default()}
                    </h2>
                    <p class="text-sm text-fg-muted">
                        {move || employee.get().map(|e| format!("Employee ID: {}", e.id)).unwrap_or_default()}
                    </p>
                </div>
                <button
                    type="button"
                    class="text-action-link hover:underline text-sm"
                    on:click=move |_| vm.show_status()
                >
                    "View my requests"
                </button>
            </div>
            <LeaveForm
                state=vm.form
                message=vm.message
                pending=pending
                on_submit=Callback::new(move |_| vm.submit())
            />
        </div>
    }
}
