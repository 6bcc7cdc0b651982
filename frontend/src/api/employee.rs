use super::{
    client::{ApiClient, BackendAction},
    types::{
        ApiError, CreateLeaveRequest, Employee, EmployeeHistoryResponse, IdParams, LeaveRequest,
        LeaveRequestsResponse, ResubmitRequest, SubmitLeaveResponse, VacationEvent,
        VacationHistoryResponse, VerifiedResponse,
    },
};

impl ApiClient {
    pub async fn verify_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let response: VerifiedResponse = self
            .dispatch(BackendAction::Verify, &IdParams::new(id), "Invalid employee ID")
            .await?;
        Ok(Employee {
            id: id.to_string(),
            name: response.name,
        })
    }

    /// Returns the confirmation message the backend attaches to a new request.
    pub async fn submit_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<String, ApiError> {
        let response: SubmitLeaveResponse = self
            .dispatch(BackendAction::Add, request, "Error submitting request")
            .await?;
        Ok(response
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Leave request submitted successfully".to_string()))
    }

    pub async fn get_employee_requests(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let response: LeaveRequestsResponse = self
            .dispatch(
                BackendAction::GetEmployeeRequests,
                &IdParams::new(employee_id),
                "Failed to load requests",
            )
            .await?;
        Ok(response.requests)
    }

    pub async fn resubmit_request(&self, request: &ResubmitRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .dispatch(
                BackendAction::ResubmitRequest,
                request,
                "Error resubmitting request",
            )
            .await?;
        Ok(())
    }

    pub async fn get_vacation_history(
        &self,
        employee_id: &str,
    ) -> Result<Vec<VacationEvent>, ApiError> {
        let response: VacationHistoryResponse = self
            .dispatch(
                BackendAction::GetVacationHistory,
                &IdParams::new(employee_id),
                "Failed to load vacation history",
            )
            .await?;
        Ok(response.history)
    }

    pub async fn get_employee_history(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let response: EmployeeHistoryResponse = self
            .dispatch(
                BackendAction::GetEmployeeHistory,
                &IdParams::new(employee_id),
                "Failed to load history",
            )
            .await?;
        Ok(response.history)
    }
}
