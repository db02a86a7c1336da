//! Plain actions: the only values reducers ever see.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::StoreError;

/// Namespaced action type, `"<slice>/<event>"`.
///
/// Guaranteed non-empty. A type without `/` has an empty namespace and
/// therefore reaches no slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionType(String);

impl ActionType {
    pub fn new(raw: impl Into<String>) -> Result<Self, StoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(StoreError::EmptyActionType);
        }
        Ok(Self(raw))
    }

    /// Slice namespace, the part before the first `/`.
    pub fn namespace(&self) -> &str {
        self.0.split_once('/').map(|(ns, _)| ns).unwrap_or("")
    }

    /// Event name, the part after the first `/`.
    pub fn event(&self) -> &str {
        self.0.split_once('/').map(|(_, ev)| ev).unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActionType {
    type Error = StoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ActionType::new(raw)
    }
}

impl From<ActionType> for String {
    fn from(ty: ActionType) -> Self {
        ty.0
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable description of an intent to change state.
///
/// The payload is untyped on purpose: each slice decodes the actions
/// addressed to it into its own intent enum and reports shape errors as
/// [`StoreError::InvalidPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Action {
    /// Build an action from a runtime type string.
    pub fn new(action_type: impl Into<String>, payload: Option<Value>) -> Result<Self, StoreError> {
        Ok(Self {
            action_type: ActionType::new(action_type)?,
            payload,
        })
    }

    /// Payload-less action for a slice event. Used by action creators.
    pub fn namespaced(namespace: &str, event: &str) -> Self {
        debug_assert!(!namespace.is_empty() && !event.is_empty());
        Self {
            action_type: ActionType(format!("{namespace}/{event}")),
            payload: None,
        }
    }

    /// Attach a payload, serializing it to JSON.
    ///
    /// Domain payloads are plain data; a value that fails to serialize is
    /// stored as `null` and will be rejected by the receiving reducer.
    pub fn with_payload<T: Serialize>(mut self, payload: T) -> Self {
        let value = serde_json::to_value(payload).unwrap_or_else(|e| {
            tracing::warn!(action = %self.action_type, error = %e, "payload failed to serialize");
            Value::Null
        });
        self.payload = Some(value);
        self
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Decode the payload into `T`.
    ///
    /// A missing payload or a shape mismatch is an `InvalidPayload` error.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let Some(value) = &self.payload else {
            return Err(StoreError::invalid_payload(
                self.action_type.as_str(),
                "missing payload",
            ));
        };
        T::deserialize(value)
            .map_err(|e| StoreError::invalid_payload(self.action_type.as_str(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_type_is_rejected() {
        assert_eq!(Action::new("", None), Err(StoreError::EmptyActionType));
    }

    #[test]
    fn namespace_and_event_split_on_first_slash() {
        let ty = ActionType::new("account/loan/extra").unwrap();
        assert_eq!(ty.namespace(), "account");
        assert_eq!(ty.event(), "loan/extra");
    }

    #[test]
    fn bare_type_has_empty_namespace() {
        let ty = ActionType::new("increment").unwrap();
        assert_eq!(ty.namespace(), "");
        assert_eq!(ty.event(), "increment");
    }

    #[test]
    fn payload_as_reports_missing_payload() {
        let action = Action::namespaced("account", "deposit");
        let err = action.payload_as::<i64>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidPayload { ref reason, .. } if reason == "missing payload"));
    }

    #[test]
    fn payload_as_reports_wrong_shape() {
        let action = Action::namespaced("account", "deposit").with_payload("lots");
        assert!(matches!(
            action.payload_as::<i64>(),
            Err(StoreError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn deserializes_wire_shape() {
        let action: Action =
            serde_json::from_value(json!({"type": "account/deposit", "payload": 500})).unwrap();
        assert_eq!(action.action_type().as_str(), "account/deposit");
        assert_eq!(action.payload_as::<i64>().unwrap(), 500);
    }

    #[test]
    fn deserializing_empty_type_fails() {
        let result: Result<Action, _> = serde_json::from_value(json!({"type": ""}));
        assert!(result.is_err());
    }
}
