use crate::api::{Employee, HrUser};
use leptos::*;

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Who is signed in. Employee and HR sessions never coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Employee(Employee),
    Hr(HrUser),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    EmployeeLogin,
    HrLogin,
    RequestForm,
    Status,
    Dashboard,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::EmployeeLogin => "/",
            Screen::HrLogin => "/hr/login",
            Screen::RequestForm => "/request",
            Screen::Status => "/status",
            Screen::Dashboard => "/hr",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub screen: Screen,
}

impl SessionState {
    pub fn employee(&self) -> Option<&Employee> {
        match &self.session {
            Session::Employee(employee) => Some(employee),
            _ => None,
        }
    }

    pub fn hr_user(&self) -> Option<&HrUser> {
        match &self.session {
            Session::Hr(user) => Some(user),
            _ => None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match &self.session {
            Session::Anonymous => None,
            Session::Employee(employee) => Some(employee.name.as_str()),
            Session::Hr(user) => Some(user.name.as_str()),
        }
    }

    pub fn login_employee(&mut self, employee: Employee) {
        log::info!("employee {} signed in", employee.id);
        self.session = Session::Employee(employee);
        self.screen = Screen::RequestForm;
    }

    pub fn login_hr(&mut self, user: HrUser) {
        log::info!("hr reviewer {} signed in", user.id);
        self.session = Session::Hr(user);
        self.screen = Screen::Dashboard;
    }

    pub fn logout(&mut self) {
        if self.session != Session::Anonymous {
            log::info!("session ended");
        }
        self.session = Session::Anonymous;
        self.screen = Screen::EmployeeLogin;
    }

    pub fn show_hr_login(&mut self) {
        if self.session == Session::Anonymous {
            self.screen = Screen::HrLogin;
        }
    }

    pub fn show_employee_login(&mut self) {
        if self.session == Session::Anonymous {
            self.screen = Screen::EmployeeLogin;
        }
    }

    pub fn show_request_form(&mut self) {
        if self.employee().is_some() {
            self.screen = Screen::RequestForm;
        }
    }

    pub fn show_status(&mut self) {
        if self.employee().is_some() {
            self.screen = Screen::Status;
        }
    }
}

fn create_session_context() -> SessionContext {
    create_signal(SessionState::default())
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context::<SessionContext>(create_session_context());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(create_session_context)
}
