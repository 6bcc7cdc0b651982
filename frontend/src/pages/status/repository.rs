use crate::api::{ApiClient, ApiError, LeaveRequest, ResubmitRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct StatusRepository {
    client: Rc<ApiClient>,
}

impl StatusRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_employee_requests(employee_id).await
    }

    pub async fn resubmit(&self, request: ResubmitRequest) -> Result<(), ApiError> {
        self.client.resubmit_request(&request).await
    }
}
