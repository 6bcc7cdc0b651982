use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Unknown => "Unknown",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, LeaveStatus::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl LeaveRequest {
    pub fn remarks_text(&self) -> Option<&str> {
        self.remarks
            .as_deref()
            .map(str::trim)
            .filter(|remarks| !remarks.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummary {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub has_pending: bool,
    #[serde(default)]
    pub has_approved: bool,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationEvent {
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedResponse {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeaveResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaveRequestsResponse {
    #[serde(default)]
    pub requests: Vec<LeaveRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStaffResponse {
    #[serde(default)]
    pub staff: Vec<StaffSummary>,
    #[serde(default)]
    pub total_employees: Option<u32>,
    #[serde(default)]
    pub on_leave_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StaffListResponse {
    #[serde(default)]
    pub staff: Vec<StaffSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VacationHistoryResponse {
    #[serde(default)]
    pub history: Vec<VacationEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeHistoryResponse {
    #[serde(default)]
    pub history: Vec<LeaveRequest>,
}

/// Form body for actions keyed by a single identifier.
#[derive(Debug, Clone, Serialize)]
pub struct IdParams {
    pub id: String,
}

impl IdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoParams {}

#[derive(Clone, Serialize)]
pub struct HrCredentials {
    pub id: String,
    pub password: String,
}

impl std::fmt::Debug for HrCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HrCredentials")
            .field("id", &self.id)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub id: String,
    pub name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResubmitRequest {
    pub id: String,
    pub employee_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    pub id: String,
    pub status: LeaveStatus,
    pub remarks: String,
    pub hr_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Default for ApiError {
    fn default() -> Self {
        Self::unknown(String::new())
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REMOTE_ERROR".to_string(),
            details: None,
        }
    }
}

/// Accepts JSON strings, numbers and null for fields the backend is loose about.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
