//! Account feature module.
//!
//! Balance, deposits, withdrawals and a single outstanding loan.
//!
//! # Architecture
//!
//! - `state.rs` - Balance, loan and conversion status
//! - `intent.rs` - Decoded `account/*` events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `actions.rs` - Action creators, including the converting deposit thunk

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{
    conversion_failed, converting_currency, deposit, deposit_converted, deposit_in, pay_loan,
    request_loan, withdraw, ACCOUNT_CURRENCY,
};
pub use intent::AccountIntent;
pub use reducer::AccountReducer;
pub use state::AccountState;
