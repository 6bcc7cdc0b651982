use super::{
    client::{ApiClient, BackendAction},
    types::{
        ActiveStaffResponse, ApiError, HrCredentials, HrUser, LeaveRequest,
        LeaveRequestsResponse, NoParams, StaffListResponse, StaffSummary, UpdateRequestStatus,
        VerifiedResponse,
    },
};

impl ApiClient {
    pub async fn verify_hr(&self, credentials: &HrCredentials) -> Result<HrUser, ApiError> {
        let response: VerifiedResponse = self
            .dispatch(BackendAction::VerifyHr, credentials, "Invalid HR credentials")
            .await?;
        Ok(HrUser {
            id: credentials.id.clone(),
            name: response.name,
        })
    }

    pub async fn get_pending_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let response: LeaveRequestsResponse = self
            .dispatch(BackendAction::GetPendingRequests, &NoParams {}, "Load failed")
            .await?;
        Ok(response.requests)
    }

    pub async fn update_request_status(
        &self,
        update: &UpdateRequestStatus,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .dispatch(
                BackendAction::UpdateRequestStatus,
                update,
                "Error updating request status",
            )
            .await?;
        Ok(())
    }

    pub async fn get_active_staff(&self) -> Result<ActiveStaffResponse, ApiError> {
        self.dispatch(
            BackendAction::GetActiveStaff,
            &NoParams {},
            "Failed to load active staff",
        )
        .await
    }

    pub async fn get_on_leave_staff(&self) -> Result<Vec<StaffSummary>, ApiError> {
        let response: StaffListResponse = self
            .dispatch(
                BackendAction::GetOnLeaveStaff,
                &NoParams {},
                "Failed to load staff on leave",
            )
            .await?;
        Ok(response.staff)
    }
}
