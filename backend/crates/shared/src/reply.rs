//! Reply Envelope
//!
//! Uniform wrapper for every JSON reply the API produces. A reply is either
//! `{"success": true, "<key>": <payload>}` or
//! `{"success": false, "message": "<text>"}` and never anything else.

use serde::Serialize;
use serde_json::{Map, Value};

/// Uniform success/error reply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyObject {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl ReplyObject {
    /// Successful reply carrying `value` under `key`.
    ///
    /// A value that fails to serialize is stored as `null`; payloads here are
    /// plain DTOs so this never happens in practice.
    pub fn success(key: impl Into<String>, value: impl Serialize) -> Self {
        let mut payload = Map::new();
        payload.insert(
            key.into(),
            serde_json::to_value(value).unwrap_or(Value::Null),
        );
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    /// Successful reply without payload
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            payload: Map::new(),
        }
    }

    /// Negative reply carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            payload: Map::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Payload value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let reply = ReplyObject::success("token", "abc.def");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, json!({"success": true, "token": "abc.def"}));
        assert!(reply.is_success());
        assert!(reply.message().is_none());
    }

    #[test]
    fn test_error_shape() {
        let reply = ReplyObject::error("Wrong parameters");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, json!({"success": false, "message": "Wrong parameters"}));
        assert!(reply.get("token").is_none());
    }

    #[test]
    fn test_ok_shape() {
        let json = serde_json::to_value(ReplyObject::ok()).unwrap();
        assert_eq!(json, json!({"success": true}));
    }

    #[test]
    fn test_structured_payload() {
        #[derive(Serialize)]
        struct Item {
            id: u32,
        }

        let reply = ReplyObject::success("items", vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(reply.get("items"), Some(&json!([{"id": 1}, {"id": 2}])));
    }
}
