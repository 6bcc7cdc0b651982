use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

/// Every backend call is a POST to one script URL, dispatched by `?action=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendAction {
    Verify,
    Add,
    GetEmployeeRequests,
    ResubmitRequest,
    VerifyHr,
    GetPendingRequests,
    UpdateRequestStatus,
    GetActiveStaff,
    GetOnLeaveStaff,
    GetVacationHistory,
    GetEmployeeHistory,
}

impl BackendAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendAction::Verify => "verify",
            BackendAction::Add => "add",
            BackendAction::GetEmployeeRequests => "getEmployeeRequests",
            BackendAction::ResubmitRequest => "resubmitRequest",
            BackendAction::VerifyHr => "verifyHr",
            BackendAction::GetPendingRequests => "getPendingRequests",
            BackendAction::UpdateRequestStatus => "updateRequestStatus",
            BackendAction::GetActiveStaff => "getActiveStaff",
            BackendAction::GetOnLeaveStaff => "getOnLeaveStaff",
            BackendAction::GetVacationHistory => "getVacationHistory",
            BackendAction::GetEmployeeHistory => "getEmployeeHistory",
        }
    }

    /// Status value the backend uses to signal success for this action.
    pub fn success_status(&self) -> &'static str {
        match self {
            BackendAction::Verify | BackendAction::VerifyHr => "verified",
            _ => "ok",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_script_url().await
        }
    }

    /// Sends `action` with `params` as a form body and returns the decoded
    /// payload once the envelope status matches the action's success value.
    pub(crate) async fn dispatch<P, R>(
        &self,
        action: BackendAction,
        params: &P,
        fallback: &str,
    ) -> Result<R, ApiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        log::debug!("backend call: {}", action.as_str());
        let request = self
            .client
            .post(base_url)
            .query(&[("action", action.as_str())])
            .form(params);
        let response = self.send(request, fallback).await?;
        let body = Self::read_body(response, fallback).await?;
        let body = check_envelope(action, body, fallback)?;
        serde_json::from_value(body).map_err(|e| {
            log::warn!("{}: failed to decode response: {}", action.as_str(), e);
            ApiError::unknown(format!("Failed to parse response: {}", e))
        })
    }

    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client.execute(request).await.map_err(|e| {
            log::warn!("request failed: {}", e);
            ApiError::request_failed(fallback)
        })
    }

    async fn read_body(response: Response, fallback: &str) -> Result<Value, ApiError> {
        let status = response.status();
        let body: Option<Value> = response.json().await.ok();
        if status.is_success() {
            body.ok_or_else(|| ApiError::unknown("Failed to parse response"))
        } else {
            log::warn!("backend answered HTTP {}", status);
            Err(ApiError::request_failed(
                body.as_ref()
                    .and_then(envelope_message)
                    .unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

fn envelope_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn check_envelope(action: BackendAction, body: Value, fallback: &str) -> Result<Value, ApiError> {
    let status = body.get("status").and_then(Value::as_str).unwrap_or_default();
    if status == action.success_status() {
        Ok(body)
    } else {
        let message = envelope_message(&body).unwrap_or_else(|| fallback.to_string());
        log::warn!("{} rejected: {}", action.as_str(), message);
        Err(ApiError::remote(message))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_actions_expect_verified_status() {
        assert_eq!(BackendAction::Verify.success_status(), "verified");
        assert_eq!(BackendAction::VerifyHr.success_status(), "verified");
        assert_eq!(BackendAction::Add.success_status(), "ok");
        assert_eq!(BackendAction::GetOnLeaveStaff.as_str(), "getOnLeaveStaff");
    }

    #[test]
    fn envelope_with_matching_status_passes_through() {
        let body = json!({ "status": "ok", "requests": [] });
        let checked = check_envelope(BackendAction::GetPendingRequests, body.clone(), "x").unwrap();
        assert_eq!(checked, body);
    }

    #[test]
    fn envelope_error_prefers_server_message() {
        let err = check_envelope(
            BackendAction::Verify,
            json!({ "status": "error", "message": "Employee not found" }),
            "Invalid employee ID",
        )
        .unwrap_err();
        assert_eq!(err.error, "Employee not found");
        assert_eq!(err.code, "REMOTE_ERROR");
    }

    #[test]
    fn envelope_error_falls_back_when_message_missing_or_blank() {
        let err = check_envelope(
            BackendAction::Verify,
            json!({ "status": "ok", "message": "  " }),
            "Invalid employee ID",
        )
        .unwrap_err();
        assert_eq!(err.error, "Invalid employee ID");
    }
}
