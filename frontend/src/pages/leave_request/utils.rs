use crate::api::{ApiError, CreateLeaveRequest, Employee};
use crate::utils::date::{derive_end_date, parse_date};
use chrono::NaiveDate;
use leptos::*;

pub const LEAVE_TYPES: [&str; 4] = ["Casual", "Sick", "Annual", "Unpaid"];
const DEFAULT_LEAVE_TYPE: &str = "Casual";
const DEFAULT_DAYS: &str = "1";

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    days: RwSignal<String>,
    end_date: Memo<Option<NaiveDate>>,
    reason: RwSignal<String>,
    email: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        let start_date = create_rw_signal(String::new());
        let days = create_rw_signal(DEFAULT_DAYS.to_string());
        let end_date = create_memo(move |_| {
            start_date.with(|start| days.with(|days| derive_end_date(start, days)))
        });
        Self {
            leave_type: create_rw_signal(DEFAULT_LEAVE_TYPE.to_string()),
            start_date,
            days,
            end_date,
            reason: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn days_signal(&self) -> RwSignal<String> {
        self.days
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn end_date(&self) -> Memo<Option<NaiveDate>> {
        self.end_date
    }

    /// End date as the `YYYY-MM-DD` value a date input expects.
    pub fn end_date_value(&self) -> String {
        self.end_date
            .get()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Clears everything but the leave type.
    pub fn reset(&self) {
        self.start_date.set(String::new());
        self.days.set(DEFAULT_DAYS.into());
        self.reason.set(String::new());
        self.email.set(String::new());
    }

    pub fn to_payload(&self, employee: &Employee) -> Result<CreateLeaveRequest, ApiError> {
        let start = parse_date(&self.start_date.get_untracked());
        let end = self.end_date.get_untracked();
        let (Some(start_date), Some(end_date)) = (start, end) else {
            return Err(ApiError::validation(
                "Please select start date and enter total days",
            ));
        };
        let email = self.email.get_untracked().trim().to_string();
        Ok(CreateLeaveRequest {
            id: employee.id.clone(),
            name: employee.name.clone(),
            leave_type: self.leave_type.get_untracked(),
            start_date,
            end_date,
            reason: self.reason.get_untracked().trim().to_string(),
            email: (!email.is_empty()).then_some(email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_employee;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn end_date_follows_start_and_days() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            assert_eq!(state.end_date_value(), "");
            state.start_signal().set("2024-03-01".into());
            assert_eq!(state.end_date_value(), "2024-03-01");
            state.days_signal().set("5".into());
            assert_eq!(state.end_date_value(), "2024-03-05");
            state.days_signal().set("0".into());
            assert_eq!(state.end_date_value(), "");
        });
    }

    #[test]
    fn payload_requires_start_and_days() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            state.days_signal().set("3".into());
            let err = state.to_payload(&sample_employee()).unwrap_err();
            assert_eq!(err.error, "Please select start date and enter total days");

            state.start_signal().set("2024-03-01".into());
            state.days_signal().set("abc".into());
            assert!(state.to_payload(&sample_employee()).is_err());
        });
    }

    #[test]
    fn payload_carries_identity_and_optional_email() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            state.leave_type_signal().set("Sick".into());
            state.start_signal().set("2024-03-01".into());
            state.days_signal().set("5".into());
            state.reason_signal().set("  Flu  ".into());
            let payload = state.to_payload(&sample_employee()).unwrap();
            assert_eq!(payload.id, "E100");
            assert_eq!(payload.name, "Asha Rao");
            assert_eq!(payload.leave_type, "Sick");
            assert_eq!(payload.end_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
            assert_eq!(payload.reason, "Flu");
            assert_eq!(payload.email, None);

            state.email_signal().set(" asha@example.com ".into());
            let payload = state.to_payload(&sample_employee()).unwrap();
            assert_eq!(payload.email.as_deref(), Some("asha@example.com"));
        });
    }

    #[test]
    fn reset_clears_entries_but_keeps_leave_type() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            state.leave_type_signal().set("Unpaid".into());
            state.start_signal().set("2024-03-01".into());
            state.days_signal().set("4".into());
            state.email_signal().set("a@b.c".into());
            state.reset();
            assert_eq!(state.leave_type_signal().get(), "Unpaid");
            assert_eq!(state.days_signal().get(), "1");
            assert!(state.start_signal().get().is_empty());
            assert!(state.email_signal().get().is_empty());
            assert!(state.end_date().get().is_none());
        });
    }
}
