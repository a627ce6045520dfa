//! Integers with a compile-time lower bound.
//!
//! `BoundedInt<MIN>` centralizes the "at least MIN" invariant so value types
//! hold a checked integer instead of a raw primitive.

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// An `i64` guaranteed to be `>= MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundedInt<const MIN: i64>(i64);

/// Zero or greater. Used for frame rates, where 0 means "not applicable".
pub type NonNegative = BoundedInt<0>;

/// Strictly positive. Used for release years.
pub type Positive = BoundedInt<1>;

impl<const MIN: i64> BoundedInt<MIN> {
    /// The inclusive lower bound.
    pub const LOWER_BOUND: i64 = MIN;

    pub fn new(value: i64) -> CoreResult<Self> {
        if value < MIN {
            return Err(CoreError::OutOfRangeNumericInput {
                field: "value",
                min: MIN,
                value,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl<const MIN: i64> TryFrom<i64> for BoundedInt<MIN> {
    type Error = CoreError;

    fn try_from(value: i64) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl<const MIN: i64> From<BoundedInt<MIN>> for i64 {
    fn from(bounded: BoundedInt<MIN>) -> Self {
        bounded.0
    }
}

impl<const MIN: i64> fmt::Display for BoundedInt<MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero() {
        let zero = NonNegative::new(0).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.get(), 0);
    }

    #[test]
    fn non_negative_rejects_negative() {
        let err = NonNegative::new(-3).unwrap_err();
        assert_eq!(err.to_string(), "value must be at least 0, got -3");
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(Positive::new(0).is_err());
        assert_eq!(Positive::new(1995).unwrap().to_string(), "1995");
        assert_eq!(Positive::LOWER_BOUND, 1);
    }

    #[test]
    fn conversions() {
        let fps: NonNegative = 24_i64.try_into().unwrap();
        assert_eq!(i64::from(fps), 24);
        assert_eq!(serde_json::to_string(&fps).unwrap(), "24");
    }
}
