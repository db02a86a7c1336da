//! Typed intents decoded from plain actions.

use super::action::Action;
use super::error::StoreError;

/// A slice's closed set of events.
///
/// Each slice decodes the actions addressed to its namespace into one of
/// these. Decoding is where payload shape is checked.
pub trait SliceIntent: Sized + Send + 'static {
    /// Decode an action whose namespace matched the slice.
    ///
    /// Returns `Ok(None)` for an event name the slice does not know, and
    /// `Err(InvalidPayload)` for a known event with a malformed payload.
    fn decode(action: &Action) -> Result<Option<Self>, StoreError>;
}
