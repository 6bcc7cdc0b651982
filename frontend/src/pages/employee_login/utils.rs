use crate::api::ApiError;

pub fn validate_employee_id(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation("Please enter your employee ID"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_is_trimmed() {
        assert_eq!(validate_employee_id("  E100 ").unwrap(), "E100");
    }

    #[test]
    fn blank_employee_id_is_rejected() {
        let err = validate_employee_id("   ").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Please enter your employee ID");
    }
}
