use super::view_model::use_hr_login_view_model;
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn HrLoginPanel() -> impl IntoView {
    let vm = use_hr_login_view_model();
    let pending = vm.login_action.pending();
    let hr_id = vm.hr_id;
    let password = vm.password;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">"HR login"</h2>
                <form class="space-y-6" on:submit=on_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="hr-id" class="sr-only">"HR ID"</label>
                            <input
                                id="hr-id"
                                type="text"
                                class="appearance-none rounded-t-md relative block w-full px-3 py-2 border border-border text-fg sm:text-sm"
                                placeholder="HR ID"
                                prop:value=move || hr_id.get()
                                on:input=move |ev| hr_id.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="hr-password" class="sr-only">"Password"</label>
                            <input
                                id="hr-password"
                                type="password"
                                class="appearance-none rounded-b-md relative block w-full px-3 py-2 border border-border text-fg sm:text-sm"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=vm.error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Verifying..." } else { "Login" }}
                    </button>
                </form>
                <p class="text-center text-sm">
                    <button
                        type="button"
                        class="text-action-link hover:underline"
                        on:click=move |_| vm.back_to_employee_login()
                    >
                        "Back to employee login"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hr_login_panel_renders_both_fields() {
        let html = render_to_string(move || view! { <HrLoginPanel /> });
        assert!(html.contains("HR ID"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Back to employee login"));
    }
}
