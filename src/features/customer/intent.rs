//! Intents for the customer slice.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::store::{Action, SliceIntent, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerIntent {
    /// Timestamp comes from the action creator, never from the reducer.
    Create {
        full_name: String,
        id: String,
        created_at: DateTime<Utc>,
    },
    UpdateName { full_name: String },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewCustomer {
    full_name: String,
    id: String,
    created_at: DateTime<Utc>,
}

impl SliceIntent for CustomerIntent {
    fn decode(action: &Action) -> Result<Option<Self>, StoreError> {
        let intent = match action.action_type().event() {
            "createCustomer" => {
                let NewCustomer {
                    full_name,
                    id,
                    created_at,
                } = action.payload_as()?;
                CustomerIntent::Create {
                    full_name,
                    id,
                    created_at,
                }
            }
            "updateName" => CustomerIntent::UpdateName {
                full_name: action.payload_as()?,
            },
            _ => return Ok(None),
        };
        Ok(Some(intent))
    }
}
