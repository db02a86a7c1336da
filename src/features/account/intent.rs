//! Intents for the account slice.

use serde::Deserialize;

use crate::money::Money;
use crate::store::{Action, SliceIntent, StoreError};

/// Events the account reducer handles.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountIntent {
    Deposit { amount: Money },
    Withdraw { amount: Money },
    /// Ignored while a loan is outstanding.
    RequestLoan { amount: Money, purpose: String },
    /// Repays the whole outstanding loan; carries no payload.
    PayLoan,
    /// A foreign-currency deposit started converting.
    ConvertingCurrency,
    /// A conversion finished; credits the converted amount.
    DepositConverted { amount: Money },
    ConversionFailed { message: String },
}

#[derive(Deserialize)]
struct LoanRequest {
    amount: Money,
    purpose: String,
}

impl SliceIntent for AccountIntent {
    fn decode(action: &Action) -> Result<Option<Self>, StoreError> {
        let intent = match action.action_type().event() {
            "deposit" => AccountIntent::Deposit {
                amount: action.payload_as()?,
            },
            "withdraw" => AccountIntent::Withdraw {
                amount: action.payload_as()?,
            },
            "requestLoan" => {
                let LoanRequest { amount, purpose } = action.payload_as()?;
                AccountIntent::RequestLoan { amount, purpose }
            }
            "payLoan" => AccountIntent::PayLoan,
            "convertingCurrency" => AccountIntent::ConvertingCurrency,
            "depositConverted" => AccountIntent::DepositConverted {
                amount: action.payload_as()?,
            },
            "conversionFailed" => AccountIntent::ConversionFailed {
                message: action.payload_as()?,
            },
            _ => return Ok(None),
        };
        Ok(Some(intent))
    }
}
