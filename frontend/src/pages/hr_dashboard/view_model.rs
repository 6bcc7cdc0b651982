use super::{
    repository::HrDashboardRepository,
    utils::{
        group_history_by_year, summary_counts, validate_history_id, DashboardPanel, HistoryYear,
        PanelVisibility, SummaryCounts,
    },
};
use crate::api::{
    ActiveStaffResponse, ApiClient, ApiError, HrUser, LeaveRequest, LeaveStatus, StaffSummary,
    UpdateRequestStatus,
};
use crate::state::session::use_session;
use crate::utils::dialog;
use leptos::*;

type PendingResource = Resource<u32, Result<Vec<LeaveRequest>, ApiError>>;
type ActiveStaffResource = Resource<u32, Result<ActiveStaffResponse, ApiError>>;
type OnLeaveResource = Resource<u32, Result<Vec<StaffSummary>, ApiError>>;
type HistoryResource =
    Resource<(Option<String>, u32), Option<Result<Vec<LeaveRequest>, ApiError>>>;

#[derive(Clone, Copy)]
pub struct DashboardReloads {
    pub pending: RwSignal<u32>,
    pub active_staff: RwSignal<u32>,
    pub on_leave: RwSignal<u32>,
}

impl DashboardReloads {
    fn new() -> Self {
        Self {
            pending: create_rw_signal(0),
            active_staff: create_rw_signal(0),
            on_leave: create_rw_signal(0),
        }
    }

    pub fn bump_all(&self) {
        for signal in [self.pending, self.active_staff, self.on_leave] {
            signal.update(|value| *value = value.wrapping_add(1));
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeHistoryLookup {
    pub input: RwSignal<String>,
    pub query: RwSignal<Option<String>>,
    pub version: RwSignal<u32>,
    pub error: RwSignal<Option<ApiError>>,
    pub resource: HistoryResource,
}

impl EmployeeHistoryLookup {
    pub fn search(&self) {
        match validate_history_id(&self.input.get_untracked()) {
            Ok(id) => {
                self.error.set(None);
                self.query.set(Some(id));
                self.version.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                self.error.set(Some(err));
                self.query.set(None);
            }
        }
    }

    pub fn groups(&self) -> Signal<Vec<HistoryYear>> {
        let resource = self.resource;
        let groups = create_memo(move |_| {
            let history = resource
                .get()
                .flatten()
                .and_then(Result::ok)
                .unwrap_or_default();
            group_history_by_year(history)
        });
        groups.into()
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.resource;
        Signal::derive(move || resource.get().flatten().and_then(Result::err))
    }

    /// True once a search has come back, successfully or not.
    pub fn searched(&self) -> Signal<bool> {
        let resource = self.resource;
        Signal::derive(move || resource.with(|value| matches!(value, Some(Some(_)))))
    }
}

#[derive(Clone, Copy)]
pub struct HrDashboardViewModel {
    pub hr_user: Memo<Option<HrUser>>,
    pub pending_resource: PendingResource,
    pub active_staff_resource: ActiveStaffResource,
    pub on_leave_resource: OnLeaveResource,
    pub reloads: DashboardReloads,
    pub visibility: RwSignal<PanelVisibility>,
    pub decision_action: Action<UpdateRequestStatus, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub selected_staff: RwSignal<Option<String>>,
    pub history: EmployeeHistoryLookup,
}

fn apply_decision_result(
    result: Option<Result<(), ApiError>>,
    action_error: RwSignal<Option<ApiError>>,
    reloads: DashboardReloads,
) {
    match result {
        Some(Ok(())) => {
            action_error.set(None);
            reloads.bump_all();
        }
        Some(Err(err)) => {
            dialog::alert(&err.error);
            action_error.set(Some(err));
        }
        None => {}
    }
}

fn decision_payload(
    request_id: String,
    status: LeaveStatus,
    remarks: String,
    reviewer: Option<HrUser>,
) -> Option<UpdateRequestStatus> {
    let reviewer = reviewer?;
    Some(UpdateRequestStatus {
        id: request_id,
        status,
        remarks,
        hr_id: reviewer.id,
    })
}

impl HrDashboardViewModel {
    /// Re-fetches every panel, as on screen entry.
    pub fn enter(&self) {
        self.reloads.bump_all();
    }

    pub fn pending_requests(&self) -> Signal<Vec<LeaveRequest>> {
        let resource = self.pending_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn pending_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.pending_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn active_staff(&self) -> Signal<Vec<StaffSummary>> {
        let resource = self.active_staff_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|response| response.staff)
                .unwrap_or_default()
        })
    }

    pub fn active_staff_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.active_staff_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn on_leave_staff(&self) -> Signal<Vec<StaffSummary>> {
        let resource = self.on_leave_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn on_leave_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.on_leave_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn counts(&self) -> Signal<SummaryCounts> {
        let pending = self.pending_resource;
        let active = self.active_staff_resource;
        let on_leave = self.on_leave_resource;
        let counts = create_memo(move |_| {
            let pending = pending.get().and_then(Result::ok);
            let active = active.get().and_then(Result::ok);
            let on_leave = on_leave.get().and_then(Result::ok);
            summary_counts(pending.as_deref(), active.as_ref(), on_leave.as_deref())
        });
        counts.into()
    }

    pub fn is_visible(&self, panel: DashboardPanel) -> Signal<bool> {
        let visibility = self.visibility;
        Signal::derive(move || visibility.with(|v| v.is_visible(panel)))
    }

    pub fn toggle_panel(&self, panel: DashboardPanel) {
        let mut shown = false;
        self.visibility.update(|v| shown = v.toggle(panel));
        if shown {
            dialog::scroll_into_view(panel.element_id());
        }
    }

    pub fn decide(&self, request_id: String, status: LeaveStatus, remarks: String) {
        if self.decision_action.pending().get_untracked() {
            return;
        }
        match decision_payload(request_id, status, remarks, self.hr_user.get_untracked()) {
            Some(payload) => {
                self.action_error.set(None);
                self.decision_action.dispatch(payload);
            }
            None => self
                .action_error
                .set(Some(ApiError::validation("Please login first"))),
        }
    }

    /// Opens the vacation timeline for one employee, or closes it when
    /// the same employee is picked again.
    pub fn toggle_staff_history(&self, employee_id: String) {
        self.selected_staff.update(|selected| {
            *selected = match selected.take() {
                Some(current) if current == employee_id => None,
                _ => Some(employee_id),
            };
        });
    }
}

pub fn use_hr_dashboard_view_model() -> HrDashboardViewModel {
    let (session, _) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(HrDashboardRepository::new(api));
    let hr_user = create_memo(move |_| session.with(|s| s.hr_user().cloned()));
    let reloads = DashboardReloads::new();

    let pending_resource = create_resource(
        move || reloads.pending.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.pending_requests().await }
        },
    );
    let active_staff_resource = create_resource(
        move || reloads.active_staff.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.active_staff().await }
        },
    );
    let on_leave_resource = create_resource(
        move || reloads.on_leave.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.on_leave_staff().await }
        },
    );

    let action_error = create_rw_signal(None);
    let decision_action = create_action(move |payload: &UpdateRequestStatus| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.update_status(payload).await }
    });
    create_effect(move |_| {
        apply_decision_result(decision_action.value().get(), action_error, reloads);
    });

    let history_query = create_rw_signal(None::<String>);
    let history_version = create_rw_signal(0u32);
    let history_resource = create_resource(
        move || (history_query.get(), history_version.get()),
        move |(employee_id, _)| {
            let repo = repository.get_value();
            async move {
                match employee_id {
                    Some(id) => Some(repo.employee_history(&id).await),
                    None => None,
                }
            }
        },
    );

    HrDashboardViewModel {
        hr_user,
        pending_resource,
        active_staff_resource,
        on_leave_resource,
        reloads,
        visibility: create_rw_signal(PanelVisibility::default()),
        decision_action,
        action_error,
        selected_staff: create_rw_signal(None),
        history: EmployeeHistoryLookup {
            input: create_rw_signal(String::new()),
            query: history_query,
            version: history_version,
            error: create_rw_signal(None),
            resource: history_resource,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_hr;

    #[test]
    fn decision_payload_carries_reviewer_and_remarks_as_entered() {
        let payload = decision_payload(
            "r9".into(),
            LeaveStatus::Approved,
            "  enjoy\n".into(),
            Some(sample_hr()),
        )
        .unwrap();
        assert_eq!(payload.hr_id, "HR1");
        assert_eq!(payload.remarks, "  enjoy\n");
        assert_eq!(payload.status, LeaveStatus::Approved);
        assert!(decision_payload("r9".into(), LeaveStatus::Rejected, String::new(), None).is_none());
    }
}
