use crate::api::{
    ActiveStaffResponse, ApiClient, ApiError, LeaveRequest, StaffSummary, UpdateRequestStatus,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct HrDashboardRepository {
    client: Rc<ApiClient>,
}

impl HrDashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn pending_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_pending_requests().await
    }

    pub async fn active_staff(&self) -> Result<ActiveStaffResponse, ApiError> {
        self.client.get_active_staff().await
    }

    pub async fn on_leave_staff(&self) -> Result<Vec<StaffSummary>, ApiError> {
        self.client.get_on_leave_staff().await
    }

    pub async fn update_status(&self, update: UpdateRequestStatus) -> Result<(), ApiError> {
        self.client.update_request_status(&update).await
    }

    pub async fn employee_history(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_employee_history(employee_id).await
    }
}
