//! Domain slices.
//!
//! Each feature follows the same layout:
//! - `state.rs` - Slice state (immutable, `Arc`-shared)
//! - `intent.rs` - Events decoded from `<namespace>/*` actions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `actions.rs` - Action creators and thunks

pub mod account;
pub mod counter;
pub mod customer;
pub mod quiz;
