//! Reducer for the account slice.

use std::sync::Arc;

use crate::money::Money;
use crate::store::Reducer;

use super::intent::AccountIntent;
use super::state::AccountState;

/// Reducer for balance and loan transitions.
///
/// Pure function: conversion I/O happens in the deposit thunk, which feeds
/// the converted amount back in as `account/depositConverted`. A transition
/// that would take the balance outside the representable range leaves the
/// state unchanged.
pub struct AccountReducer;

impl Reducer for AccountReducer {
    const NAMESPACE: &'static str = "account";

    type State = AccountState;
    type Intent = AccountIntent;

    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State> {
        match intent {
            AccountIntent::Deposit { amount } => {
                with_balance(state, state.balance.checked_add(amount), |s| s)
            }

            AccountIntent::Withdraw { amount } => {
                with_balance(state, state.balance.checked_sub(amount), |s| s)
            }

            // At most one outstanding loan.
            AccountIntent::RequestLoan { .. } if state.has_loan() => Arc::clone(state),

            AccountIntent::RequestLoan { amount, purpose } => {
                with_balance(state, state.balance.checked_add(amount), |s| AccountState {
                    loan: amount,
                    loan_purpose: purpose,
                    ..s
                })
            }

            AccountIntent::PayLoan => {
                with_balance(state, state.balance.checked_sub(state.loan), |s| {
                    AccountState {
                        loan: Default::default(),
                        loan_purpose: String::new(),
                        ..s
                    }
                })
            }

            AccountIntent::ConvertingCurrency => {
                let pending = state.pending_conversions.saturating_add(1);
                Arc::new(AccountState {
                    pending_conversions: pending,
                    is_loading: true,
                    ..AccountState::clone(state)
                })
            }

            AccountIntent::DepositConverted { amount } => {
                let settled = settle_conversion(state);
                match state.balance.checked_add(amount) {
                    Some(balance) => Arc::new(AccountState { balance, ..settled }),
                    None => Arc::new(AccountState {
                        last_error: Some(format!("deposit of {} overflows the balance", amount)),
                        ..settled
                    }),
                }
            }

            AccountIntent::ConversionFailed { message } => Arc::new(AccountState {
                last_error: Some(message),
                ..settle_conversion(state)
            }),
        }
    }
}

/// Apply `update` with the new balance, or keep `state` on overflow.
fn with_balance(
    state: &Arc<AccountState>,
    balance: Option<Money>,
    update: impl FnOnce(AccountState) -> AccountState,
) -> Arc<AccountState> {
    match balance {
        Some(balance) => Arc::new(update(AccountState {
            balance,
            ..AccountState::clone(state)
        })),
        None => Arc::clone(state),
    }
}

/// One in-flight conversion finished.
fn settle_conversion(state: &AccountState) -> AccountState {
    let pending = state.pending_conversions.saturating_sub(1);
    AccountState {
        pending_conversions: pending,
        is_loading: pending > 0,
        ..state.clone()
    }
}
