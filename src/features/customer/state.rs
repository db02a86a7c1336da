//! State for the customer slice.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::SliceState;

/// The account holder.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerState {
    /// National id, empty until a customer is created.
    pub id: String,
    pub full_name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl SliceState for CustomerState {}

impl CustomerState {
    pub fn exists(&self) -> bool {
        !self.full_name.is_empty()
    }
}
