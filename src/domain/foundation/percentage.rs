//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a completed/total unit ratio.
    ///
    /// Integer floor division, matching `completed * 100 / total`.
    /// A zero total yields zero percent; completed counts above the
    /// total are clamped.
    pub fn from_ratio(completed: u32, total: u32) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let completed = completed.min(total) as u64;
        Self((completed * 100 / total as u64) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if the value is exactly 100.
    pub fn is_full(&self) -> bool {
        self.0 == 100
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        let result = Percentage::try_new(101);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn from_ratio_uses_floor_division() {
        // 2 of 5 units = 40, no rounding up
        assert_eq!(Percentage::from_ratio(2, 5).value(), 40);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(2, 3).value(), 66);
    }

    #[test]
    fn from_ratio_zero_total_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_full_completion_is_hundred() {
        assert_eq!(Percentage::from_ratio(5, 5), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_clamps_excess_completed_units() {
        assert_eq!(Percentage::from_ratio(7, 5), Percentage::HUNDRED);
    }

    #[test]
    fn is_full_only_at_hundred() {
        assert!(Percentage::HUNDRED.is_full());
        assert!(!Percentage::new(99).is_full());
        assert!(!Percentage::ZERO.is_full());
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_default_is_zero() {
        assert_eq!(Percentage::default(), Percentage::ZERO);
    }

    #[test]
    fn percentage_serializes_to_json() {
        let pct = Percentage::new(42);
        let json = serde_json::to_string(&pct).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn percentage_ordering_works() {
        assert!(Percentage::new(25) < Percentage::new(75));
    }
}
