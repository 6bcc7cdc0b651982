use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
        </div>
    }
}
