use crate::state::session::{use_session, Session, SessionState};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRole {
    Employee,
    Hr,
}

fn should_render_children(state: &SessionState, role: RequiredRole) -> bool {
    matches!(
        (&state.session, role),
        (Session::Employee(_), RequiredRole::Employee) | (Session::Hr(_), RequiredRole::Hr)
    )
}

#[component]
fn LoginPrompt() -> impl IntoView {
    let (_, set_session) = use_session();
    view! {
        <div class="max-w-md mx-auto mt-16 text-center space-y-4">
            <p class="text-fg">"Please login first"</p>
            <button
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                on:click=move |_| set_session.update(|s| s.logout())
            >
                "Go to login"
            </button>
        </div>
    }
}

fn require_role(role: RequiredRole, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let allowed = create_memo(move |_| session.with(|s| should_render_children(s, role)));
    view! {
        <Show when=move || allowed.get() fallback=|| view! { <LoginPrompt/> }>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    require_role(RequiredRole::Employee, children)
}

#[component]
pub fn RequireHr(children: ChildrenFn) -> impl IntoView {
    require_role(RequiredRole::Hr, children)
}
