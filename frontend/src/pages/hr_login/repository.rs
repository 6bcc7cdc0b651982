use crate::api::{ApiClient, ApiError, HrCredentials, HrUser};
use std::rc::Rc;

#[derive(Clone)]
pub struct HrLoginRepository {
    client: Rc<ApiClient>,
}

impl HrLoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn verify(&self, credentials: HrCredentials) -> Result<HrUser, ApiError> {
        self.client.verify_hr(&credentials).await
    }
}
