//! Quantity range value object for pack sizing

use crate::error::DomainError;

/// Inclusive `[floor, ceiling]` bounds on how many bars a pack holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityRange {
    floor: u32,
    ceiling: u32,
}

impl QuantityRange {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `floor` is zero or above `ceiling`.
    pub fn new(floor: u32, ceiling: u32) -> Result<Self, DomainError> {
        if floor == 0 {
            return Err(DomainError::validation("Quantity floor must be at least 1"));
        }
        if floor > ceiling {
            return Err(DomainError::validation(format!(
                "Quantity floor {} exceeds ceiling {}",
                floor, ceiling
            )));
        }
        Ok(Self { floor, ceiling })
    }

    /// Preset bounds; callers pass literals with `1 <= floor <= ceiling`.
    pub(crate) const fn preset(floor: u32, ceiling: u32) -> Self {
        Self { floor, ceiling }
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn contains(&self, quantity: u32) -> bool {
        (self.floor..=self.ceiling).contains(&quantity)
    }

    pub fn clamp(&self, quantity: i64) -> u32 {
        quantity.clamp(i64::from(self.floor), i64::from(self.ceiling)) as u32
    }

    /// Apply a signed step to `current` and clamp the result into range.
    pub fn step(&self, current: u32, delta: i32) -> u32 {
        self.clamp(i64::from(current) + i64::from(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(QuantityRange::new(6, 3).is_err());
        assert!(QuantityRange::new(0, 3).is_err());
    }

    #[test]
    fn test_step_within_range() {
        let range = QuantityRange::new(3, 12).expect("valid range");
        assert_eq!(range.step(3, 1), 4);
        assert_eq!(range.step(9, -2), 7);
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let range = QuantityRange::new(3, 12).expect("valid range");
        assert_eq!(range.step(12, 1), 12);
        assert_eq!(range.step(3, -1), 3);
        assert_eq!(range.step(5, i32::MIN), 3);
        assert_eq!(range.step(5, i32::MAX), 12);
    }

    #[test]
    fn test_contains() {
        let range = QuantityRange::new(6, 8).expect("valid range");
        assert!(range.contains(6));
        assert!(range.contains(8));
        assert!(!range.contains(5));
        assert!(!range.contains(9));
    }
}
