//! Action creators for the account slice.

use std::sync::Arc;

use serde_json::json;

use crate::money::Money;
use crate::remote::CurrencyConverter;
use crate::store::{Action, Dispatchable, Reducer, Thunk};

use super::reducer::AccountReducer;

/// Currency the account is kept in.
pub const ACCOUNT_CURRENCY: &str = "USD";

fn account(event: &str) -> Action {
    Action::namespaced(AccountReducer::NAMESPACE, event)
}

pub fn deposit(amount: Money) -> Action {
    account("deposit").with_payload(amount)
}

pub fn withdraw(amount: Money) -> Action {
    account("withdraw").with_payload(amount)
}

pub fn request_loan(amount: Money, purpose: impl Into<String>) -> Action {
    account("requestLoan").with_payload(json!({
        "amount": amount,
        "purpose": purpose.into(),
    }))
}

pub fn pay_loan() -> Action {
    account("payLoan")
}

pub fn converting_currency() -> Action {
    account("convertingCurrency")
}

/// Credit a converted foreign deposit and settle its pending conversion.
pub fn deposit_converted(amount: Money) -> Action {
    account("depositConverted").with_payload(amount)
}

pub fn conversion_failed(message: impl Into<String>) -> Action {
    account("conversionFailed").with_payload(message.into())
}

/// Deposit `amount` given in `currency`.
///
/// A deposit already in the account currency is a plain action. Anything
/// else becomes an async thunk that marks a conversion as pending, converts
/// through `converter`, then dispatches either `depositConverted(converted)`
/// or `conversionFailed(message)`. Each of those settles exactly one pending
/// conversion.
pub fn deposit_in(
    amount: Money,
    currency: &str,
    converter: Arc<dyn CurrencyConverter>,
) -> Dispatchable {
    if currency.eq_ignore_ascii_case(ACCOUNT_CURRENCY) {
        return deposit(amount).into();
    }

    let currency = currency.to_string();
    Thunk::spawn("account/convertDeposit", move |store| async move {
        if let Err(e) = store.dispatch(converting_currency()) {
            tracing::warn!(error = %e, "failed to mark conversion as pending");
        }

        let outcome = match converter.convert(amount, &currency, ACCOUNT_CURRENCY).await {
            Ok(converted) => deposit_converted(converted),
            Err(e) => {
                tracing::warn!(%amount, %currency, error = %e, "currency conversion failed");
                conversion_failed(e.to_string())
            }
        };

        if let Err(e) = store.dispatch(outcome) {
            tracing::error!(error = %e, "failed to dispatch conversion outcome");
        }
    })
    .into()
}
