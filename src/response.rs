//! The `{ success, ... }` envelope returned to the UI for every operation.

use crate::errors::{ErrorKind, Result};
use serde::Serialize;

/// Outcome of one operation, ready to serialize for the caller.
///
/// On success `data` holds the payload (the persisted row for writes); on
/// failure `error` holds the human-readable message and `errorKind` its
/// category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl<T> Response<T> {
    /// Successful response carrying `data`.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_kind: None,
        }
    }
}

impl<T> From<Result<T>> for Response<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(err.to_string()),
                error_kind: Some(err.kind()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let response = Response::from(Ok::<_, Error>(json!({"id": 1})));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_failure_envelope() {
        let response: Response<()> = Response::from(Err(Error::DuplicateTransactionId {
            transaction_id: "RP-AB12C".to_string(),
        }));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Transaction id RP-AB12C already exists",
                "errorKind": "conflict"
            })
        );
    }
}
