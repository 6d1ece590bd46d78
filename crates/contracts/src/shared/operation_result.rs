use serde::{Deserialize, Serialize};

/// Envelope returned by every backend endpoint and by every service call.
///
/// `success == true` means `data` carries the payload (it may still be `None`
/// for endpoints that return nothing). `success == false` means
/// `error_message` explains the failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> OperationResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }

    /// Successful call without a payload
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error_message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_message: Some(message.into()),
        }
    }

    /// Error text to show the user. Falls back to a generic message when the
    /// server reported a failure without one.
    pub fn error_text(&self) -> String {
        self.error_message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Operation failed".to_string())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        OperationResult {
            success: self.success,
            data: self.data.map(f),
            error_message: self.error_message,
        }
    }

    /// Converts the envelope into a `Result`, requiring a payload on success.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self.error_text());
        }
        self.data
            .ok_or_else(|| "Server returned no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_server_envelope() {
        let json = r#"{"success":true,"data":[1,2,3],"errorMessage":null}"#;
        let parsed: OperationResult<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data, Some(vec![1, 2, 3]));
        assert_eq!(parsed.error_message, None);
    }

    #[test]
    fn test_parses_failure_without_data_field() {
        let json = r#"{"success":false,"errorMessage":"Code already exists"}"#;
        let parsed: OperationResult<String> = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.into_result(), Err("Code already exists".to_string()));
    }

    #[test]
    fn test_blank_error_message_gets_generic_text() {
        let result: OperationResult<()> = OperationResult {
            success: false,
            data: None,
            error_message: Some("  ".into()),
        };
        assert_eq!(result.error_text(), "Operation failed");
    }

    #[test]
    fn test_success_without_payload_is_an_error_for_into_result() {
        let result: OperationResult<i32> = OperationResult::ok_empty();
        assert!(result.into_result().is_err());
    }
}
