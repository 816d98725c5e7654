//! Constrained percentage value type.
//!
//! Every percentage-typed option in this crate (opacity, scale, position
//! coordinates) is a [`Percent`]: an integer in the inclusive range 0..=100,
//! validated once when the value is constructed rather than at each use site.

use std::fmt;

use crate::error::{Error, Result};

/// An integer percentage in the inclusive range 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// Create a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPercent`] when `value` is outside 0..=100.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(Error::InvalidPercent(value))
    }

    /// Create a percentage from a compile-time constant.
    ///
    /// # Panics
    ///
    /// Panics when `value` exceeds 100. In const contexts this is a
    /// compile-time failure.
    #[must_use]
    pub const fn from_static(value: u8) -> Self {
        assert!(value <= 100, "percentage must be between 0 and 100");
        Self(value)
    }

    /// The raw percentage value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Map the percentage onto the 8-bit alpha range: `floor(255 * v / 100)`.
    ///
    /// 0 maps to fully transparent, 100 to fully opaque (255).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // at most 255
    pub const fn to_alpha(self) -> u8 {
        (255 * self.0 as u32 / 100) as u8
    }

    /// Take this percentage of a pixel length: `floor(length * v / 100)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // at most `length`
    pub fn scale(self, length: u32) -> u32 {
        (u64::from(length) * u64::from(self.0) / 100) as u32
    }
}

impl TryFrom<i64> for Percent {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
