//! The `{ success, result, error }` wrapper every API reply is sent in.

use serde::Serialize;

/// Top-level response wrapper.
///
/// `result` and `error` are always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// A successful reply carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// A failed reply carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_keeps_null_error() {
        let json = serde_json::to_string(&Envelope::ok(1)).unwrap();
        assert_eq!(json, r#"{"success":true,"result":1,"error":null}"#);
    }

    #[test]
    fn test_failure_keeps_null_result() {
        let json = serde_json::to_string(&Envelope::<u8>::failure("bad input")).unwrap();
        assert_eq!(json, r#"{"success":false,"result":null,"error":"bad input"}"#);
    }
}
