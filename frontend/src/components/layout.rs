use crate::state::session::{use_session, Screen, Session};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let identity = move || {
        let state = session.get();
        match &state.session {
            Session::Anonymous => None,
            Session::Employee(employee) => Some(format!("{} ({})", employee.name, employee.id)),
            Session::Hr(user) => Some(format!("HR: {}", user.name)),
        }
    };
    let is_employee = move || session.with(|s| s.employee().is_some());
    let is_signed_in = move || session.with(|s| s.session != Session::Anonymous);
    let current = move || session.with(|s| s.screen);

    let on_logout = move |_| set_session.update(|s| s.logout());

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Leave Desk"</h1>
                    <Show when=is_signed_in>
                        <nav class="flex items-center space-x-4">
                            <span class="text-sm text-fg-muted">{identity}</span>
                            <Show when=is_employee>
                                <button
                                    class=NAV_LINK
                                    class:font-semibold=move || current() == Screen::RequestForm
                                    on:click=move |_| set_session.update(|s| s.show_request_form())
                                >
                                    "New request"
                                </button>
                                <button
                                    class=NAV_LINK
                                    class:font-semibold=move || current() == Screen::Status
                                    on:click=move |_| set_session.update(|s| s.show_status())
                                >
                                    "My requests"
                                </button>
                            </Show>
                            <button class=NAV_LINK on:click=on_logout>
                                "Logout"
                            </button>
                        </nav>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
