//! State for the account slice.

use serde::Serialize;

use crate::money::Money;
use crate::store::SliceState;

/// Balance and the single outstanding loan.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub balance: Money,
    /// Zero when no loan is outstanding.
    pub loan: Money,
    pub loan_purpose: String,
    /// Conversions started and not yet settled.
    pub pending_conversions: u32,
    /// At least one currency conversion is in flight.
    pub is_loading: bool,
    /// Message of the last failed conversion.
    pub last_error: Option<String>,
}

impl SliceState for AccountState {}

impl AccountState {
    pub fn has_loan(&self) -> bool {
        !self.loan.is_zero()
    }
}
