//! Action creators for the customer slice.

use chrono::Utc;
use serde_json::json;

use crate::store::{Action, Reducer};

use super::reducer::CustomerReducer;

/// Stamps the action with the current time. Two calls never share a
/// timestamp value; everything else is a pure function of the arguments.
pub fn create_customer(full_name: impl Into<String>, id: impl Into<String>) -> Action {
    Action::namespaced(CustomerReducer::NAMESPACE, "createCustomer").with_payload(json!({
        "fullName": full_name.into(),
        "id": id.into(),
        "createdAt": Utc::now(),
    }))
}

pub fn update_name(full_name: impl Into<String>) -> Action {
    Action::namespaced(CustomerReducer::NAMESPACE, "updateName").with_payload(full_name.into())
}
