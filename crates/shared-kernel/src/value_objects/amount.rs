// crates/shared-kernel/src/value_objects/amount.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Non-negative monetary amount read from a designated numeric column.
///
/// The only way to build one from raw text is [`Amount::parse_or_zero`], which
/// never fails: absent, unparsable and negative inputs all collapse to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    #[inline]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Clamps `value` into the non-negative range. NaN maps to zero.
    #[inline]
    pub fn new(value: f64) -> Self {
        // f64::max returns the non-NaN operand
        Self(0.0_f64.max(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Parses a raw cell value.
    ///
    /// Every `,` becomes `.` so that `"1234,50"` reads as `1234.50`.
    pub fn parse_or_zero(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::zero();
        };
        let normalized = raw.replace(',', ".");
        normalized.trim().parse::<f64>().map_or_else(|_| Self::zero(), Self::new)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
