//! Units of length used to interpret raw edge magnitudes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of length for raw edge magnitudes.
///
/// A unit matters only while a [`Cuboid`](crate::Cuboid) is being
/// constructed or rendered; stored edges are always meters.
///
/// # Example
///
/// ```
/// use cuboid_types::LengthUnit;
///
/// assert_eq!(LengthUnit::from_str("cm"), Some(LengthUnit::Centimeter));
/// assert_eq!(LengthUnit::default(), LengthUnit::Meter);
/// assert!((LengthUnit::Millimeter.to_meters(250.0) - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    /// Millimeters (1e-3 m).
    Millimeter,
    /// Centimeters (1e-2 m).
    Centimeter,
    /// Meters.
    #[default]
    Meter,
}

impl LengthUnit {
    /// Parse a unit from its short symbol.
    ///
    /// Recognizes exactly `"mm"`, `"cm"`, and `"m"`.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            "m" => Some(Self::Meter),
            _ => None,
        }
    }

    /// Get the short symbol for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }

    /// Number of these units in one meter.
    #[must_use]
    pub const fn per_meter(self) -> f64 {
        match self {
            Self::Millimeter => 1000.0,
            Self::Centimeter => 100.0,
            Self::Meter => 1.0,
        }
    }

    /// Convert a magnitude in this unit to meters.
    #[must_use]
    pub fn to_meters(self, magnitude: f64) -> f64 {
        magnitude / self.per_meter()
    }

    /// Convert a length in meters to this unit.
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters * self.per_meter()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
