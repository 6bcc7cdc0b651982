use crate::api::{ApiClient, ApiError, VacationEvent};
use std::rc::Rc;

#[derive(Clone)]
pub struct VacationHistoryRepository {
    client: Rc<ApiClient>,
}

impl VacationHistoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self, employee_id: &str) -> Result<Vec<VacationEvent>, ApiError> {
        self.client.get_vacation_history(employee_id).await
    }
}
