use crate::api::{ApiClient, ApiError, CreateLeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(&self, payload: CreateLeaveRequest) -> Result<String, ApiError> {
        self.client.submit_leave_request(&payload).await
    }
}
