use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::pages::leave_request::utils::{LeaveFormState, LEAVE_TYPES};
use crate::state::message::MessageState;
use leptos::*;

#[component]
pub fn LeaveForm(
    state: LeaveFormState,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let leave_type = state.leave_type_signal();
    let start_signal = state.start_signal();
    let days_signal = state.days_signal();
    let reason_signal = state.reason_signal();
    let email_signal = state.email_signal();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">"Leave request"</h3>
                <p class="text-sm text-fg-muted">
                    "Pick a start date and the number of days. The end date is filled in for you."
                </p>
            </div>
            {move || message.get().error.map(|err| view! { <ErrorMessage message=err.error /> })}
            {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div>
                    <label class="block text-sm font-medium text-fg">"Leave type"</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|kind| view! { <option value=*kind>{*kind}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                    <div>
                        <label class="block text-sm font-medium text-fg">"Start date"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg">"Total days"</label>
                        <input
                            type="number"
                            min="1"
                            step="1"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || days_signal.get()
                            on:input=move |ev| days_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg">"End date"</label>
                        <input
                            type="date"
                            readonly
                            class="mt-1 block w-full border rounded px-2 py-1 bg-surface-muted"
                            prop:value=move || state.end_date_value()
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Reason"</label>
                    <textarea
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Email (optional)"</label>
                    <input
                        type="email"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || email_signal.get()
                        on:input=move |ev| email_signal.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                </button>
            </form>
        </div>
    }
}
