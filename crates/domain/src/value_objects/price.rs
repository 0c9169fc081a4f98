//! Price value object
//!
//! Prices are whole currency units. The storefront never shows cents, so
//! there is no rounding anywhere in the pricing pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::DomainError;

/// A non-negative amount in whole currency units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub const fn units(self) -> u32 {
        self.0
    }

    /// Multiply by a unit count, saturating at `u32::MAX`.
    pub fn times(self, count: u32) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Amount by which this price exceeds `threshold`, zero otherwise.
    pub fn excess_over(self, threshold: Price) -> Self {
        Self(self.0.saturating_sub(threshold.0))
    }

    /// Build a price from a signed intermediate, flooring negatives at zero.
    pub fn from_signed(value: i64) -> Self {
        Self(value.clamp(0, i64::from(u32::MAX)) as u32)
    }

    /// Parse a price the way the catalog markup writes it (`"12"`, `" 8 "`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for anything that isn't a non-negative
    /// integer.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::parse(format!("Invalid price: '{}'", s)))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl From<u32> for Price {
    fn from(units: u32) -> Self {
        Self(units)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_currency_sign() {
        assert_eq!(Price::new(45).to_string(), "$45");
    }

    #[test]
    fn excess_over_threshold() {
        assert_eq!(Price::new(10).excess_over(Price::new(8)), Price::new(2));
        assert_eq!(Price::new(8).excess_over(Price::new(8)), Price::ZERO);
        assert_eq!(Price::new(5).excess_over(Price::new(8)), Price::ZERO);
    }

    #[test]
    fn from_signed_floors_at_zero() {
        assert_eq!(Price::from_signed(-30), Price::ZERO);
        assert_eq!(Price::from_signed(105), Price::new(105));
    }

    #[test]
    fn parse_accepts_integers_only() {
        assert_eq!(Price::parse(" 12 "), Ok(Price::new(12)));
        assert!(matches!(Price::parse("7.5"), Err(DomainError::Parse(_))));
        assert!(Price::parse("-1").is_err());
        assert!(Price::parse("").is_err());
    }

    #[test]
    fn sums_and_saturates() {
        let total: Price = [Price::new(5), Price::new(5), Price::new(5)].into_iter().sum();
        assert_eq!(total, Price::new(15));
        assert_eq!(Price::new(u32::MAX) + Price::new(1), Price::new(u32::MAX));
    }
}
