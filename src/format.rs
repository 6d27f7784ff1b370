//! Text rendering of cuboid edges.

use std::fmt;

use crate::cuboid::Cuboid;
use crate::error::{CuboidError, CuboidResult};
use crate::unit::LengthUnit;

impl Cuboid {
    /// Render the three edges in the given unit, joined by `" × "`.
    ///
    /// - Meters: three decimal places per edge.
    /// - Centimeters: one decimal place per edge.
    /// - Millimeters: default float rendering, no fixed decimal count.
    ///
    /// # Example
    ///
    /// ```
    /// use cuboid_types::{Cuboid, LengthUnit};
    ///
    /// let p = Cuboid::from_meters(1.0, 2.0, 3.0)?;
    ///
    /// assert_eq!(p.format_as(LengthUnit::Meter), "1.000 m × 2.000 m × 3.000 m");
    /// assert_eq!(p.format_as(LengthUnit::Centimeter), "100.0 cm × 200.0 cm × 300.0 cm");
    /// assert_eq!(p.format_as(LengthUnit::Millimeter), "1000 mm × 2000 mm × 3000 mm");
    /// # Ok::<(), cuboid_types::CuboidError>(())
    /// ```
    #[must_use]
    pub fn format_as(&self, unit: LengthUnit) -> String {
        let a = unit.from_meters(self.a());
        let b = unit.from_meters(self.b());
        let c = unit.from_meters(self.c());
        match unit {
            LengthUnit::Meter => format!("{a:.3} m × {b:.3} m × {c:.3} m"),
            LengthUnit::Centimeter => format!("{a:.1} cm × {b:.1} cm × {c:.1} cm"),
            LengthUnit::Millimeter => format!("{a} mm × {b} mm × {c} mm"),
        }
    }

    /// Render the edges for a short unit symbol: `"m"`, `"cm"`, or `"mm"`.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::UnknownFormat`] for any other string.
    pub fn format_with(&self, format: &str) -> CuboidResult<String> {
        LengthUnit::from_str(format)
            .map(|unit| self.format_as(unit))
            .ok_or_else(|| CuboidError::unknown_format(format))
    }
}

/// Meter rendering, three decimal places per edge.
impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as(LengthUnit::Meter))
    }
}
