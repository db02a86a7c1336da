//! HTTP collaborators reached from thunks.
//!
//! Both sit behind traits so stores can be driven by fakes in tests and the
//! concrete clients are built once from [`crate::config::Config`].

mod currency;
mod error;
mod questions;

pub use currency::{normalize_currency, CurrencyConverter, FrankfurterClient};
pub use error::RemoteError;
pub use questions::{HttpQuestionSource, QuestionSource};
