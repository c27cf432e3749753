//! Confidence value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A model confidence between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// No confidence at all.
    pub const ZERO: Self = Self(0.0);

    /// Full confidence.
    pub const FULL: Self = Self(1.0);

    /// Creates a new Confidence, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("{} is outside 0.0..=1.0", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the confidence as a whole percentage, rounded to nearest.
    pub fn as_percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Confidence::try_new(0.5).is_ok());
        assert!(Confidence::try_new(1.01).is_err());
        assert!(Confidence::try_new(-0.01).is_err());
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(Confidence::new(0.855).as_percent(), 86);
        assert_eq!(Confidence::new(0.6).as_percent(), 60);
        assert_eq!(Confidence::new(0.004).as_percent(), 0);
    }

    #[test]
    fn displays_as_percent() {
        assert_eq!(Confidence::new(0.9).to_string(), "90%");
    }
}
