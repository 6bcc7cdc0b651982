use crate::api::ApiError;

/// Inline success/error banner state shared by the forms.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_replace_each_other() {
        let mut state = MessageState::default();
        state.set_error(ApiError::validation("missing"));
        assert!(state.error.is_some());
        state.set_success("saved");
        assert_eq!(state.success.as_deref(), Some("saved"));
        assert!(state.error.is_none());
        state.set_error(ApiError::remote("boom"));
        assert!(state.success.is_none());
        state.clear();
        assert_eq!(state, MessageState::default());
    }
}
