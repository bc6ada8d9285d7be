//! Confidence value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A confidence score constrained to `[0.0, 1.0]` (Value Object)
///
/// Workers attach a confidence to every conclusion and critique. Values
/// outside the range are rejected at the boundary, not clamped, so a
/// malformed report stays visible instead of being quietly repaired.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub const MIN: Confidence = Confidence(0.0);
    pub const MAX: Confidence = Confidence(1.0);

    /// Create a confidence, rejecting non-finite values and values
    /// outside `[0.0, 1.0]`
    pub fn try_new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::ConfidenceOutOfRange(value))
        }
    }

    /// Get the raw score
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Confidence {
    /// Fixed two-decimal rendering keeps context output stable
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Confidence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Confidence::try_new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_accepted() {
        assert_eq!(Confidence::try_new(0.0).unwrap().value(), 0.0);
        assert_eq!(Confidence::try_new(1.0).unwrap().value(), 1.0);
        assert_eq!(Confidence::try_new(0.85).unwrap().value(), 0.85);
    }

    #[test]
    fn test_out_of_range_rejected_not_clamped() {
        assert!(Confidence::try_new(1.01).is_err());
        assert!(Confidence::try_new(-0.01).is_err());
        assert!(Confidence::try_new(f64::NAN).is_err());
        assert!(Confidence::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Confidence::try_new(0.9).unwrap().to_string(), "0.90");
        assert_eq!(Confidence::MAX.to_string(), "1.00");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Confidence = serde_json::from_str("0.4").unwrap();
        assert_eq!(ok.value(), 0.4);
        assert!(serde_json::from_str::<Confidence>("1.5").is_err());
    }
}
