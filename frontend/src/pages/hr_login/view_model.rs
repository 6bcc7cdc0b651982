use super::{repository::HrLoginRepository, utils::validate_credentials};
use crate::api::{ApiClient, ApiError, HrCredentials, HrUser};
use crate::state::session::{use_session, SessionState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HrLoginViewModel {
    pub hr_id: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<HrCredentials, Result<HrUser, ApiError>>,
    set_session: WriteSignal<SessionState>,
}

fn apply_login_result(
    result: Option<Result<HrUser, ApiError>>,
    password: RwSignal<String>,
    error: RwSignal<Option<ApiError>>,
    set_session: WriteSignal<SessionState>,
) {
    let Some(result) = result else {
        return;
    };
    password.set(String::new());
    match result {
        Ok(user) => {
            error.set(None);
            set_session.update(|state| state.login_hr(user));
        }
        Err(err) => error.set(Some(err)),
    }
}

impl HrLoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match validate_credentials(&self.hr_id.get_untracked(), &self.password.get_untracked()) {
            Ok(credentials) => {
                self.error.set(None);
                self.login_action.dispatch(credentials);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn back_to_employee_login(&self) {
        self.error.set(None);
        self.set_session.update(|state| state.show_employee_login());
    }
}

pub fn use_hr_login_view_model() -> HrLoginViewModel {
    let (_, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(HrLoginRepository::new(api));
    let hr_id = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = create_action(move |credentials: &HrCredentials| {
        let repo = repository.get_value();
        let credentials = credentials.clone();
        async move { repo.verify(credentials).await }
    });

    create_effect(move |_| {
        apply_login_result(login_action.value().get(), password, error, set_session);
    });

    HrLoginViewModel {
        hr_id,
        password,
        error,
        login_action,
        set_session,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{Screen, SessionState};
    use crate::test_support::helpers::{provide_session, sample_hr};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn missing_password_is_caught_before_dispatch() {
        with_runtime(|| {
            let vm = use_hr_login_view_model();
            vm.hr_id.set("HR1".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.error),
                Some("Please enter both HR ID and password".to_string())
            );
            assert!(vm.login_action.input().get().is_none());
        });
    }

    #[test]
    fn verified_reviewer_opens_dashboard() {
        with_runtime(|| {
            let (session, set_session) = provide_session(SessionState::default());
            let password = create_rw_signal("secret".to_string());
            let error = create_rw_signal(None);
            apply_login_result(Some(Ok(sample_hr())), password, error, set_session);
            assert!(password.get().is_empty());
            assert_eq!(session.get().screen, Screen::Dashboard);
            assert_eq!(session.get().hr_user(), Some(&sample_hr()));
        });
    }

    #[test]
    fn rejected_credentials_stay_on_hr_login() {
        with_runtime(|| {
            let mut initial = SessionState::default();
            initial.show_hr_login();
            let (session, set_session) = provide_session(initial.clone());
            let password = create_rw_signal("bad".to_string());
            let error = create_rw_signal(None);
            apply_login_result(
                Some(Err(ApiError::remote("Invalid HR credentials"))),
                password,
                error,
                set_session,
            );
            assert_eq!(error.get().map(|e| e.error), Some("Invalid HR credentials".into()));
            assert_eq!(session.get(), initial);
        });
    }

    #[test]
    fn back_link_returns_to_employee_login() {
        with_runtime(|| {
            let mut initial = SessionState::default();
            initial.show_hr_login();
            let (session, _) = provide_session(initial);
            let vm = use_hr_login_view_model();
            vm.back_to_employee_login();
            assert_eq!(session.get().screen, Screen::EmployeeLogin);
        });
    }
}
