//! Expense identifiers
//!
//! Ids are integers derived from the creation timestamp in milliseconds, the
//! same shape the stored data has always used, wrapped in a newtype so they
//! cannot be confused with amounts or other integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Utc;

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw integer id
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Hands out monotonic ids derived from a millisecond clock
///
/// Two expenses created within the same millisecond still get distinct ids:
/// the next id is always at least one past the last one issued. Once the
/// generator has reached `i64::MAX` it can no longer move forward, and falls
/// back to the highest id at or below the clock that `in_use` reports free.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: ExpenseId) {
        self.last = self.last.max(id.value());
    }

    /// Next id for the given clock reading
    pub fn next_at(&mut self, now_millis: i64, in_use: impl Fn(ExpenseId) -> bool) -> ExpenseId {
        if let Some(after_last) = self.last.checked_add(1) {
            let id = now_millis.max(after_last);
            self.last = id;
            return ExpenseId(id);
        }

        let mut candidate = now_millis;
        while in_use(ExpenseId(candidate)) {
            candidate = candidate.wrapping_sub(1);
        }
        ExpenseId(candidate)
    }

    /// Next id using the wall clock
    pub fn next_id(&mut self, in_use: impl Fn(ExpenseId) -> bool) -> ExpenseId {
        self.next_at(Utc::now().timestamp_millis(), in_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unused(_: ExpenseId) -> bool {
        false
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = ExpenseId::new(1_700_000_000_000);
        assert_eq!(id.to_string(), "1700000000000");
        assert_eq!("1700000000000".parse::<ExpenseId>().unwrap(), id);
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let id = ExpenseId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: ExpenseId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_generator_follows_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_at(1000, unused).value(), 1000);
        assert_eq!(ids.next_at(2000, unused).value(), 2000);
    }

    #[test]
    fn test_generator_same_millisecond_is_unique() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1000, unused);
        let b = ids.next_at(1000, unused);
        let c = ids.next_at(999, unused);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_generator_skips_observed_ids() {
        let mut ids = IdGenerator::default();
        ids.observe(ExpenseId::new(10));
        ids.observe(ExpenseId::new(5_000));
        ids.observe(ExpenseId::new(20));
        assert_eq!(ids.next_at(100, unused).value(), 5_001);
    }

    #[test]
    fn test_generator_at_max_picks_free_id_below_clock() {
        let mut ids = IdGenerator::default();
        ids.observe(ExpenseId::new(i64::MAX));

        let mut taken = vec![ExpenseId::new(i64::MAX), ExpenseId::new(1000)];
        let first = ids.next_at(1000, |id| taken.contains(&id));
        assert_eq!(first.value(), 999);

        taken.push(first);
        let second = ids.next_at(1000, |id| taken.contains(&id));
        assert_eq!(second.value(), 998);
    }
}
