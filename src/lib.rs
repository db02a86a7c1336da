//! slicebank: an action-driven reducer store and the slices built on it.
//!
//! # Modules
//!
//! - [`store`]: actions, reducers, slice registry, store, middleware
//! - [`features`]: account, customer, counter and quiz slices
//! - [`remote`]: HTTP collaborators (currency rates, quiz questions)
//! - [`app`]: store construction and injected services
//! - [`config`]: TOML configuration
//! - [`money`]: fixed-point amounts
//!
//! # Example
//!
//! ```
//! use slicebank::app::bank_store;
//! use slicebank::features::account::{self, AccountReducer};
//! use slicebank::money::Money;
//!
//! let store = bank_store()?;
//! store.dispatch(account::deposit(Money::from_major(300)))?;
//! store.dispatch(account::request_loan(Money::from_major(1000), "home"))?;
//!
//! let acct = store.get_state().slice::<AccountReducer>().unwrap();
//! assert_eq!(acct.balance, Money::from_major(1300));
//! # Ok::<(), slicebank::store::StoreError>(())
//! ```

pub mod app;
pub mod config;
pub mod features;
pub mod logging;
pub mod money;
pub mod remote;
pub mod store;
