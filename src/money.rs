//! Fixed-point currency amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An amount in minor units (cents).
///
/// Integer arithmetic keeps deposit/withdraw sequences exact. Serialized as
/// the raw cent count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole units. Saturates at the representable range.
    pub const fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Convert a provider float, rounding to the nearest cent.
    pub fn from_f64(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if cents.is_finite() && cents.abs() < i64::MAX as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `None` when the sum leaves the `i64` cent range.
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Money) -> Option<Money> {
        match self.0.checked_sub(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || MoneyParseError::Invalid(s.to_string());
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(invalid)?;
        Ok(Money(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("300".parse::<Money>().unwrap(), Money::from_major(300));
        assert_eq!("12.5".parse::<Money>().unwrap(), Money::from_cents(1250));
        assert_eq!("12.05".parse::<Money>().unwrap(), Money::from_cents(1205));
        assert_eq!("-3.10".parse::<Money>().unwrap(), Money::from_cents(-310));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(matches!("".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!("1.234".parse::<Money>(), Err(MoneyParseError::TooPrecise(_))));
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents(130005).to_string(), "1300.05");
        assert_eq!(Money::from_cents(-7).to_string(), "-0.07");
    }

    #[test]
    fn from_f64_rounds_to_nearest_cent() {
        assert_eq!(Money::from_f64(108.456), Some(Money::from_cents(10846)));
        assert_eq!(Money::from_f64(f64::NAN), None);
    }

    #[test]
    fn checked_arithmetic_stops_at_the_range() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_major(3).checked_sub(Money::from_cents(50)),
            Some(Money::from_cents(250))
        );
        assert_eq!(Money::from_major(i64::MAX), max);
    }

    #[test]
    fn serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::from_major(5)).unwrap(), "500");
    }
}
