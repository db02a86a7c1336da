use thiserror::Error;

/// Errors raised while building a store or dispatching into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `Store::new` was handed a registry without slices.
    #[error("Slice registry is empty")]
    EmptyRegistry,

    /// Two slices claimed the same namespace.
    #[error("Slice namespace '{namespace}' is already registered")]
    DuplicateSlice { namespace: String },

    /// Namespace is empty or contains the `/` separator.
    #[error("Invalid slice namespace '{namespace}'")]
    InvalidNamespace { namespace: String },

    #[error("Action type must not be empty")]
    EmptyActionType,

    /// Payload is missing or has the wrong shape for its action type.
    #[error("Invalid payload for '{action_type}': {reason}")]
    InvalidPayload { action_type: String, reason: String },

    /// A strict slice received an event it does not recognize.
    #[error("Slice '{namespace}' does not handle action '{action_type}'")]
    UnknownAction {
        namespace: String,
        action_type: String,
    },

    /// A thunk reached the reducer stage because no middleware ran it.
    #[error("Thunk '{label}' was dispatched without a thunk middleware")]
    UnhandledThunk { label: String },

    /// An async thunk was dispatched outside a tokio runtime.
    #[error("Thunk '{label}' needs a tokio runtime to spawn on")]
    NoRuntime { label: String },

    /// Internal: the tree holds a value of another type under this namespace.
    #[error("State stored under '{namespace}' has an unexpected type")]
    SliceTypeMismatch { namespace: String },

    #[error("State tree has no slice '{namespace}'")]
    MissingSlice { namespace: String },
}

impl StoreError {
    pub(crate) fn invalid_payload(action_type: &str, reason: impl Into<String>) -> Self {
        StoreError::InvalidPayload {
            action_type: action_type.to_string(),
            reason: reason.into(),
        }
    }
}
