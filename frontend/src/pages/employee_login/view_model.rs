use super::{repository::EmployeeLoginRepository, utils::validate_employee_id};
use crate::api::{ApiClient, ApiError, Employee};
use crate::state::session::{use_session, SessionState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeLoginViewModel {
    pub employee_id: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<String, Result<Employee, ApiError>>,
    set_session: WriteSignal<SessionState>,
}

fn apply_login_result(
    result: Option<Result<Employee, ApiError>>,
    employee_id: RwSignal<String>,
    error: RwSignal<Option<ApiError>>,
    set_session: WriteSignal<SessionState>,
) {
    match result {
        Some(Ok(employee)) => {
            error.set(None);
            employee_id.set(String::new());
            set_session.update(|state| state.login_employee(employee));
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    }
}

impl EmployeeLoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match validate_employee_id(&self.employee_id.get_untracked()) {
            Ok(id) => {
                self.error.set(None);
                self.login_action.dispatch(id);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn switch_to_hr(&self) {
        self.error.set(None);
        self.set_session.update(|state| state.show_hr_login());
    }
}

pub fn use_employee_login_view_model() -> EmployeeLoginViewModel {
    let (_, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(EmployeeLoginRepository::new(api));
    let employee_id = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |id: &String| {
        let repo = repository.get_value();
        let id = id.clone();
        async move { repo.verify(&id).await }
    });

    create_effect(move |_| {
        apply_login_result(login_action.value().get(), employee_id, error, set_session);
    });

    EmployeeLoginViewModel {
        employee_id,
        error,
        login_action,
        set_session,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{Screen, SessionState};
    use crate::test_support::helpers::{provide_session, sample_employee};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_employee_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.employee_id.get().is_empty());
        });
    }

    #[test]
    fn blank_id_sets_inline_error_without_dispatch() {
        with_runtime(|| {
            let vm = use_employee_login_view_model();
            vm.employee_id.set("   ".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.error),
                Some("Please enter your employee ID".to_string())
            );
            assert!(vm.login_action.input().get().is_none());
        });
    }

    #[test]
    fn verified_result_signs_in_and_clears_form() {
        with_runtime(|| {
            let (session, set_session) = provide_session(SessionState::default());
            let employee_id = create_rw_signal("E100".to_string());
            let error = create_rw_signal(Some(ApiError::remote("old")));
            apply_login_result(Some(Ok(sample_employee())), employee_id, error, set_session);
            assert!(error.get().is_none());
            assert!(employee_id.get().is_empty());
            let state = session.get();
            assert_eq!(state.screen, Screen::RequestForm);
            assert_eq!(state.employee(), Some(&sample_employee()));
        });
    }

    #[test]
    fn failed_result_keeps_login_screen() {
        with_runtime(|| {
            let (session, set_session) = provide_session(SessionState::default());
            let employee_id = create_rw_signal("E404".to_string());
            let error = create_rw_signal(None);
            apply_login_result(
                Some(Err(ApiError::remote("Invalid employee ID"))),
                employee_id,
                error,
                set_session,
            );
            assert_eq!(error.get().map(|e| e.error), Some("Invalid employee ID".into()));
            assert_eq!(employee_id.get(), "E404");
            assert_eq!(session.get(), SessionState::default());
        });
    }

    #[test]
    fn switch_to_hr_changes_screen() {
        with_runtime(|| {
            let (session, _) = provide_session(SessionState::default());
            let vm = use_employee_login_view_model();
            vm.switch_to_hr();
            assert_eq!(session.get().screen, Screen::HrLogin);
        });
    }
}
