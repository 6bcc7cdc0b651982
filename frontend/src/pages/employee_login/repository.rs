use crate::api::{ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeLoginRepository {
    client: Rc<ApiClient>,
}

impl EmployeeLoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn verify(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.client.verify_employee(employee_id).await
    }
}
