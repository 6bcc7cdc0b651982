#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, HrUser, LeaveRequest, LeaveStatus, StaffSummary};
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn sample_employee() -> Employee {
        Employee {
            id: "E100".into(),
            name: "Asha Rao".into(),
        }
    }

    pub fn sample_hr() -> HrUser {
        HrUser {
            id: "HR1".into(),
            name: "Meera Iyer".into(),
        }
    }

    pub fn leave_request(id: &str, start: &str, end: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            employee_id: "E100".into(),
            employee_name: "Asha Rao".into(),
            leave_type: "Casual".into(),
            start_date: start.into(),
            end_date: end.into(),
            reason: "Family trip".into(),
            status,
            remarks: None,
            timestamp: None,
        }
    }

    pub fn staff(id: &str, name: &str) -> StaffSummary {
        StaffSummary {
            id: id.into(),
            name: name.into(),
            has_pending: false,
            has_approved: false,
            month: String::new(),
            leave_type: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn provide_session(state: SessionState) -> SessionContext {
        let ctx = create_signal(state);
        provide_context::<SessionContext>(ctx);
        ctx
    }

    pub fn employee_session() -> SessionContext {
        let mut state = SessionState::default();
        state.login_employee(sample_employee());
        provide_session(state)
    }

    pub fn hr_session() -> SessionContext {
        let mut state = SessionState::default();
        state.login_hr(sample_hr());
        provide_session(state)
    }
}
