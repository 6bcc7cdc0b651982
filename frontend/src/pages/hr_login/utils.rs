use crate::api::{ApiError, HrCredentials};

pub fn validate_credentials(id: &str, password: &str) -> Result<HrCredentials, ApiError> {
    let id = id.trim();
    let password = password.trim();
    if id.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Please enter both HR ID and password"));
    }
    Ok(HrCredentials {
        id: id.to_string(),
        password: password.to_string(),
    })
}
