// crates/shared-kernel/src/value_objects/length.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Quantity;

pub const INCHES_PER_FOOT: i64 = 12;

/// A panel length in whole inches.
///
/// Inches are the only unit used for computation; feet exist purely as a
/// presentation form (see [`FeetInches`]). Negative values are representable
/// because the length parser accepts signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(i64);

impl Inches {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Combines a feet and inches pair, returning `None` on overflow.
    pub fn from_feet_and_inches(feet: i64, inches: i64) -> Option<Self> {
        feet.checked_mul(INCHES_PER_FOOT)
            .and_then(|f| f.checked_add(inches))
            .map(Self)
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Length multiplied by a panel count, returning `None` on overflow.
    pub fn checked_mul_quantity(self, quantity: Quantity) -> Option<Self> {
        let count = i64::try_from(quantity.value()).ok()?;
        self.0.checked_mul(count).map(Self)
    }

    /// Splits into whole feet and remaining inches (truncating division).
    #[inline]
    pub const fn to_feet_inches(self) -> FeetInches {
        FeetInches { feet: self.0 / INCHES_PER_FOOT, inches: self.0 % INCHES_PER_FOOT }
    }
}

impl Default for Inches {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Inches {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Inches> for i64 {
    fn from(value: Inches) -> Self {
        value.value()
    }
}

impl PartialEq<i64> for Inches {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// `{}` prints the raw inch count, `{:#}` prints feet-and-inches notation.
impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_feet_inches())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Presentation form of a length: `12' 6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: i64,
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {}\"", self.feet, self.inches)
    }
}

impl From<Inches> for FeetInches {
    fn from(value: Inches) -> Self {
        value.to_feet_inches()
    }
}
