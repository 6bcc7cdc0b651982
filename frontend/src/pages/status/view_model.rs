use super::{
    repository::StatusRepository,
    utils::{partition_by_year, PartitionedRequests},
};
use crate::api::{ApiClient, ApiError, Employee, LeaveRequest, ResubmitRequest};
use crate::state::{
    message::MessageState,
    session::{use_session, SessionState},
};
use crate::utils::{date::current_year, dialog};
use leptos::*;

type RequestsResource = Resource<(Option<String>, u32), Result<Vec<LeaveRequest>, ApiError>>;

#[derive(Clone, Copy)]
pub struct StatusViewModel {
    pub employee: Memo<Option<Employee>>,
    pub requests_resource: RequestsResource,
    pub reload: RwSignal<u32>,
    pub show_older: RwSignal<bool>,
    pub show_history: RwSignal<bool>,
    pub confirm_target: RwSignal<Option<LeaveRequest>>,
    pub message: RwSignal<MessageState>,
    pub resubmit_action: Action<ResubmitRequest, Result<(), ApiError>>,
    set_session: WriteSignal<SessionState>,
}

fn apply_resubmit_result(
    result: Option<Result<(), ApiError>>,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(())) => {
            message.update(|msg| msg.set_success("Request resubmitted successfully"));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => dialog::alert(&err.error),
        None => {}
    }
}

fn resubmit_payload(target: Option<LeaveRequest>, employee: Option<Employee>) -> Option<ResubmitRequest> {
    let target = target?;
    let employee = employee?;
    Some(ResubmitRequest {
        id: target.id,
        employee_id: employee.id,
    })
}

impl StatusViewModel {
    /// Re-fetches the request list, as on screen entry.
    pub fn enter(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn partitioned(&self) -> Signal<PartitionedRequests> {
        let resource = self.requests_resource;
        let year = current_year();
        let parts = create_memo(move |_| {
            let requests = resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            partition_by_year(requests, year)
        });
        parts.into()
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn reveal_older(&self) {
        self.show_older.set(true);
    }

    pub fn toggle_history(&self) {
        self.show_history.update(|shown| *shown = !*shown);
    }

    pub fn history_employee_id(&self) -> Signal<Option<String>> {
        let employee = self.employee;
        let show_history = self.show_history;
        Signal::derive(move || {
            if show_history.get() {
                employee.get().map(|e| e.id)
            } else {
                None
            }
        })
    }

    pub fn request_resubmit(&self, request: LeaveRequest) {
        self.confirm_target.set(Some(request));
    }

    pub fn cancel_resubmit(&self) {
        self.confirm_target.set(None);
    }

    pub fn confirm_resubmit(&self) {
        if self.resubmit_action.pending().get_untracked() {
            return;
        }
        let target = self.confirm_target.get_untracked();
        self.confirm_target.set(None);
        if let Some(payload) = resubmit_payload(target, self.employee.get_untracked()) {
            self.message.update(|msg| msg.clear());
            self.resubmit_action.dispatch(payload);
        }
    }

    pub fn show_request_form(&self) {
        self.set_session.update(|state| state.show_request_form());
    }
}

pub fn use_status_view_model() -> StatusViewModel {
    let (session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(StatusRepository::new(api));
    let employee = create_memo(move |_| session.with(|s| s.employee().cloned()));
    let reload = create_rw_signal(0u32);
    let message = create_rw_signal(MessageState::default());

    let requests_resource = create_resource(
        move || (employee.get().map(|e| e.id), reload.get()),
        move |(employee_id, _)| {
            let repo = repository.get_value();
            async move {
                match employee_id {
                    Some(id) => repo.list_requests(&id).await,
                    None => Err(ApiError::validation("Please login first")),
                }
            }
        },
    );

    let resubmit_action = create_action(move |payload: &ResubmitRequest| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.resubmit(payload).await }
    });

    create_effect(move |_| {
        apply_resubmit_result(resubmit_action.value().get(), message, reload);
    });

    StatusViewModel {
        employee,
        requests_resource,
        reload,
        show_older: create_rw_signal(false),
        show_history: create_rw_signal(false),
        confirm_target: create_rw_signal(None),
        message,
        resubmit_action,
        set_session,
    }
}
