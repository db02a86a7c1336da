//! State for the date counter.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::store::SliceState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterState {
    pub step: i64,
    pub count: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self { step: 1, count: 0 }
    }
}

impl SliceState for CounterState {}

impl CounterState {
    /// `base` shifted by `count` days. `None` if the result leaves chrono's
    /// supported range.
    pub fn date_from(&self, base: NaiveDate) -> Option<NaiveDate> {
        let days = Days::new(self.count.unsigned_abs());
        if self.count >= 0 {
            base.checked_add_days(days)
        } else {
            base.checked_sub_days(days)
        }
    }
}
