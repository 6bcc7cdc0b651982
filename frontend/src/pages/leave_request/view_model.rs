use super::{repository::LeaveRequestRepository, utils::LeaveFormState};
use crate::api::{ApiClient, ApiError, CreateLeaveRequest, Employee};
use crate::state::{
    message::MessageState,
    session::{use_session, SessionState},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveRequestViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub employee: Memo<Option<Employee>>,
    pub submit_action: Action<CreateLeaveRequest, Result<String, ApiError>>,
    set_session: WriteSignal<SessionState>,
}

fn apply_submit_result(
    result: Option<Result<String, ApiError>>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(confirmation)) => {
            form.reset();
            message.update(|msg| msg.set_success(confirmation));
        }
        Some(Err(err)) => message.update(|msg| msg.set_error(err)),
        None => {}
    }
}

impl LeaveRequestViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let Some(employee) = self.employee.get_untracked() else {
            self.message
                .update(|msg| msg.set_error(ApiError::validation("Please login first")));
            return;
        };
        match self.form.to_payload(&employee) {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.submit_action.dispatch(payload);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn show_status(&self) {
        self.set_session.update(|state| state.show_status());
    }
}

pub fn use_leave_request_view_model() -> LeaveRequestViewModel {
    let (session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveRequestRepository::new(api));
    let form = LeaveFormState::default();
    let message = create_rw_signal(MessageState::default());
    let employee = create_memo(move |_| session.with(|s| s.employee().cloned()));

    let submit_action = create_action(move |payload: &CreateLeaveRequest| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        apply_submit_result(submit_action.value().get(), form, message);
    });

    LeaveRequestViewModel {
        form,
        message,
        employee,
        submit_action,
        set_session,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Screen;
    use crate::test_support::helpers::employee_session;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn incomplete_form_reports_validation_error() {
        with_runtime(|| {
            employee_session();
            let vm = use_leave_request_view_model();
            vm.form.days_signal().set("2".into());
            vm.submit();
            let message = vm.message.get();
            assert_eq!(
                message.error.map(|e| e.error),
                Some("Please select start date and enter total days".to_string())
            );
            assert!(vm.submit_action.input().get().is_none());
        });
    }

    #[test]
    fn submit_without_employee_is_rejected() {
        with_runtime(|| {
            let vm = use_leave_request_view_model();
            vm.form.start_signal().set("2024-03-01".into());
            vm.submit();
            assert_eq!(
                vm.message.get().error.map(|e| e.error),
                Some("Please login first".to_string())
            );
        });
    }

    #[test]
    fn success_clears_form_and_shows_confirmation() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            form.start_signal().set("2024-03-01".into());
            form.days_signal().set("5".into());
            form.reason_signal().set("Trip".into());
            apply_submit_result(Some(Ok("Request submitted".into())), form, message);
            assert_eq!(message.get().success.as_deref(), Some("Request submitted"));
            assert_eq!(form.days_signal().get(), "1");
            assert!(form.start_signal().get().is_empty());
            assert!(form.reason_signal().get().is_empty());
        });
    }

    #[test]
    fn failure_keeps_entered_values() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            form.start_signal().set("2024-03-01".into());
            form.days_signal().set("5".into());
            apply_submit_result(
                Some(Err(ApiError::remote("Error submitting request"))),
                form,
                message,
            );
            assert!(message.get().error.is_some());
            assert_eq!(form.end_date_value(), "2024-03-05");
        });
    }

    #[test]
    fn status_link_switches_screen() {
        with_runtime(|| {
            let (session, _) = employee_session();
            let vm = use_leave_request_view_model();
            vm.show_status();
            assert_eq!(session.get().screen, Screen::Status);
        });
    }
}
