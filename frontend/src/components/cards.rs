use leptos::*;

/// Dashboard summary tile. Clicking it toggles the panel it counts.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<Option<usize>>,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full text-left bg-surface-elevated overflow-hidden shadow rounded-lg px-4 py-5 sm:p-6 hover:bg-action-ghost-bg-hover"
            class:ring-2=move || active.get()
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_toggle.call(())
        >
            <dt class="text-sm font-medium text-fg-muted">{title}</dt>
            <dd class="mt-1 text-2xl font-semibold text-fg">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".into())}
            </dd>
        </button>
    }
}
