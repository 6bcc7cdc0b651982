use super::repository::VacationHistoryRepository;
use crate::api::{ApiClient, ApiError, VacationEvent};
use leptos::*;

#[derive(Clone, Copy)]
pub struct VacationHistoryViewModel {
    pub employee_id: Signal<Option<String>>,
    pub history_resource: Resource<Option<String>, Option<Result<Vec<VacationEvent>, ApiError>>>,
}

impl VacationHistoryViewModel {
    pub fn events(&self) -> Signal<Vec<VacationEvent>> {
        let resource = self.history_resource;
        Signal::derive(move || {
            resource
                .get()
                .flatten()
                .and_then(Result::ok)
                .unwrap_or_default()
        })
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.history_resource;
        Signal::derive(move || resource.get().flatten().and_then(Result::err))
    }
}

/// Loads the timeline whenever `employee_id` holds an id; `None` loads nothing.
pub fn use_vacation_history_view_model(
    employee_id: Signal<Option<String>>,
) -> VacationHistoryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(VacationHistoryRepository::new(api));
    let history_resource = create_resource(
        move || employee_id.get(),
        move |id: Option<String>| {
            let repo = repository.get_value();
            async move {
                match id {
                    Some(id) => Some(repo.load(&id).await),
                    None => None,
                }
            }
        },
    );
    VacationHistoryViewModel {
        employee_id,
        history_resource,
    }
}
