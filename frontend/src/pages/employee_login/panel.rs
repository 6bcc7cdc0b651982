use super::view_model::use_employee_login_view_model;
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeLoginPanel() -> impl IntoView {
    let vm = use_employee_login_view_model();
    let pending = vm.login_action.pending();
    let employee_id = vm.employee_id;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-fg">"Employee login"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Sign in with your employee ID to request leave."
                    </p>
                </div>
                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <label for="employee-id" class="sr-only">"Employee ID"</label>
                        <input
                            id="employee-id"
                            name="employee-id"
                            type="text"
                            class="appearance-none rounded relative block w-full px-3 py-2 border border-border text-fg sm:text-sm"
                            placeholder="Employee ID"
                            prop:value=move || employee_id.get()
                            on:input=move |ev| employee_id.set(event_target_value(&ev))
                        />
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
                        on:click=move |_| vm.switch_to_hr()
                    >
                        "HR login"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionState;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form_and_hr_link() {
        let html = render_to_string(move || {
            provide_session(SessionState::default());
            view! { <EmployeeLoginPanel /> }
        });
        assert!(html.contains("Employee login"));
        assert!(html.contains("Employee ID"));
        assert!(html.contains("HR login"));
    }
}
