use super::{
    utils::{group_by_year, TimelineSide},
    view_model::use_vacation_history_view_model,
};
use crate::api::{ApiError, VacationEvent};
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use leptos::*;

#[component]
pub fn VacationTimeline(
    events: Signal<Vec<VacationEvent>>,
    loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    let groups = create_memo(move |_| events.with(|events| group_by_year(events)));
    view! {
        <div class="space-y-4">
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && groups.with(Vec::is_empty)>
                <p class="text-sm text-fg-muted">"No vacation history found."</p>
            </Show>
            <For
                each=move || groups.get()
                key=|group| group.year.clone()
                children=move |group| {
                    view! {
                        <section class="timeline-year">
                            <h4 class="text-md font-semibold text-fg">{group.year.clone()}</h4>
                            <div class="grid grid-cols-2 gap-4">
                                {group
                                    .events
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, event)| {
                                        let side = TimelineSide::for_index(index);
                                        view! {
                                            <div class=format!("timeline-entry {}", side.class())>
                                                <span class="font-medium">{event.month}</span>
                                                " "
                                                <span class="text-fg-muted">{event.date}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn VacationHistoryPanel(
    #[prop(into)] employee_id: Signal<Option<String>>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let vm = use_vacation_history_view_model(employee_id);
    let loading = vm.history_resource.loading();

    view! {
        <Show when=move || vm.employee_id.with(Option::is_some)>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                <h3 class="text-lg font-medium text-fg">{title.clone()}</h3>
                <VacationTimeline
                    events=vm.events()
                    loading=loading.into()
                    error=vm.error()
                />
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn event(year: &str, month: &str) -> VacationEvent {
        VacationEvent {
            year: year.into(),
            month: month.into(),
            date: "01".into(),
        }
    }

    #[test]
    fn timeline_alternates_columns_per_year() {
        let html = render_to_string(move || {
            let events = vec![
                event("2023", "May"),
                event("2024", "March"),
                event("2024", "April"),
            ];
            view! {
                <VacationTimeline
                    events=Signal::derive(move || events.clone())
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                />
            }
        });
        let newest = html.find("2024").unwrap();
        let oldest = html.find("2023").unwrap();
        assert!(newest < oldest);
        assert!(html.contains("timeline-left"));
        assert!(html.contains("timeline-right"));
        assert!(!html.contains("No vacation history found."));
    }

    #[test]
    fn empty_timeline_shows_placeholder() {
        let html = render_to_string(move || {
            view! {
                <VacationTimeline
                    events=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                />
            }
        });
        assert!(html.contains("No vacation history found."));
    }

    #[test]
    fn panel_hidden_without_employee() {
        let html = render_to_string(move || {
            view! { <VacationHistoryPanel employee_id=Signal::derive(|| None) title="History" /> }
        });
        assert!(!html.contains("History"));
    }
}
