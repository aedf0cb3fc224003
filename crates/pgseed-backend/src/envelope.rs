use std::fmt;

use serde::Serialize;

use pgseed_core::ColumnDescriptor;

/// Response wrapper for every backend operation.
///
/// Serializes flat: `{"success":true,"count":3}` on success and
/// `{"success":false,"error":"..."}` on failure, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err("empty response".to_string()),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Envelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::fail(err),
        }
    }
}

/// Payload of operations that only report success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ack {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tables {
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Columns {
    pub columns: Vec<ColumnDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inserted {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgseed_core::Error;

    #[test]
    fn success_payload_is_flattened() {
        let envelope = Envelope::ok(Inserted { count: 3 });
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"success":true,"count":3}"#
        );

        let envelope = Envelope::ok(Tables {
            tables: vec!["users".to_string()],
        });
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"success":true,"tables":["users"]}"#
        );
    }

    #[test]
    fn ack_carries_only_success() {
        let envelope = Envelope::ok(Ack {});
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"success":true}"#
        );
    }

    #[test]
    fn failure_has_error_and_no_payload() {
        let envelope: Envelope<Inserted> = Err::<Inserted, _>(Error::NotConnected).into();
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"success":false,"error":"Database not connected"}"#
        );
        assert_eq!(
            envelope.into_result(),
            Err("Database not connected".to_string())
        );
    }
}
