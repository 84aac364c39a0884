//! Clamped scalar value objects.
//!
//! `UnitInterval` holds probability-like values in `[0, 1]`; `SignedUnit`
//! holds signed impact values in `[-1, 1]`. Both clamp on construction and
//! on deserialization, so an out-of-range value can never be observed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Clamps `value` into `[min, max]`, mapping NaN to `fallback`.
pub fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// A value between 0 and 1 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct UnitInterval(f64);

impl UnitInterval {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Creates a new UnitInterval, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(clamp_or(value, 0.0, 1.0, 0.0))
    }

    /// Creates a UnitInterval, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("unit_interval", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - value`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for UnitInterval {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for UnitInterval {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitInterval> for f64 {
    fn from(value: UnitInterval) -> Self {
        value.0
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A value between -1 and 1 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SignedUnit(f64);

impl SignedUnit {
    pub const ZERO: Self = Self(0.0);

    /// Creates a new SignedUnit, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(clamp_or(value, -1.0, 1.0, 0.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the absolute magnitude.
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Default for SignedUnit {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for SignedUnit {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SignedUnit> for f64 {
    fn from(value: SignedUnit) -> Self {
        value.0
    }
}

impl fmt::Display for SignedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_clamps_both_ends() {
        assert_eq!(UnitInterval::new(-0.2).value(), 0.0);
        assert_eq!(UnitInterval::new(1.7).value(), 1.0);
        assert_eq!(UnitInterval::new(0.35).value(), 0.35);
    }

    #[test]
    fn unit_interval_maps_nan_to_zero() {
        assert_eq!(UnitInterval::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn unit_interval_try_new_rejects_out_of_range() {
        match UnitInterval::try_new(1.5) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "unit_interval");
                assert_eq!(actual, 1.5);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn unit_interval_complement() {
        assert!((UnitInterval::new(0.3).complement() - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn signed_unit_clamps_both_ends() {
        assert_eq!(SignedUnit::new(-3.0).value(), -1.0);
        assert_eq!(SignedUnit::new(2.0).value(), 1.0);
        assert_eq!(SignedUnit::new(-0.4).magnitude(), 0.4);
    }

    #[test]
    fn deserializing_clamps_untrusted_input() {
        let v: SignedUnit = serde_json::from_str("4.5").unwrap();
        assert_eq!(v.value(), 1.0);
        let p: UnitInterval = serde_json::from_str("-0.25").unwrap();
        assert_eq!(p.value(), 0.0);
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&SignedUnit::new(-0.5)).unwrap(), "-0.5");
    }

    #[test]
    fn signed_unit_displays_sign() {
        assert_eq!(format!("{}", SignedUnit::new(0.2)), "+0.200");
    }
}
