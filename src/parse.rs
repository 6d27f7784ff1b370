//! Parsing of rendered cuboid strings.
//!
//! The parser reads numeric tokens at fixed whitespace positions and sniffs
//! the unit by substring search, so it accepts exactly the single-space
//! token shape produced by [`Cuboid::format_as`]. It is a lossy boundary
//! adapter: the core validation and rendering logic never depend on it.

use std::str::FromStr;

use tracing::debug;

use crate::cuboid::Cuboid;
use crate::error::{CuboidError, CuboidResult};
use crate::unit::LengthUnit;

/// Token positions of the three edge magnitudes in a rendered string.
const EDGE_TOKEN_POSITIONS: [usize; 3] = [0, 3, 6];

/// Parse a rendered edge string such as `"1.000 m × 2.000 m × 3.000 m"`.
///
/// The unit is inferred by substring search in this order: `"mm"`, then
/// `"m"`, then `"cm"`. A centimeter string therefore reads as meters (its
/// `"cm"` suffix already contains an `"m"`), and its magnitudes are usually
/// rejected as out of range at construction.
///
/// # Errors
///
/// Returns [`CuboidError::MissingToken`] or [`CuboidError::InvalidToken`]
/// for malformed input, and propagates [`CuboidError::EdgeOutOfRange`] from
/// construction.
///
/// # Example
///
/// ```
/// use cuboid_types::{parse_cuboid, Cuboid};
///
/// let p = Cuboid::from_meters(1.0, 2.0, 3.0)?;
/// let back = parse_cuboid(&p.to_string())?;
/// assert_eq!(back, p);
/// # Ok::<(), cuboid_types::CuboidError>(())
/// ```
pub fn parse_cuboid(input: &str) -> CuboidResult<Cuboid> {
    let tokens: Vec<&str> = input.split(' ').collect();
    let mut edges = [0.0_f64; 3];
    for (edge, &position) in edges.iter_mut().zip(&EDGE_TOKEN_POSITIONS) {
        let token = *tokens
            .get(position)
            .ok_or(CuboidError::MissingToken { position })?;
        *edge = token.parse().map_err(|source| CuboidError::InvalidToken {
            token: token.to_string(),
            source,
        })?;
    }
    let unit = sniff_unit(input);
    debug!(?unit, ?edges, "parsed cuboid edges");
    Cuboid::new(&edges, unit)
}

/// Infer the unit by substring search. `"mm"` wins over `"m"`; the `"cm"`
/// arm is shadowed by `"m"` and never taken.
fn sniff_unit(input: &str) -> LengthUnit {
    if input.contains("mm") {
        LengthUnit::Millimeter
    } else if input.contains('m') {
        LengthUnit::Meter
    } else if input.contains("cm") {
        LengthUnit::Centimeter
    } else {
        LengthUnit::Meter
    }
}

impl FromStr for Cuboid {
    type Err = CuboidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cuboid(s)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn meter_round_trip() {
        let p = Cuboid::from_meters(1.0, 2.0, 3.0).unwrap();
        let back = parse_cuboid(&p.format_as(LengthUnit::Meter)).unwrap();
        assert_relative_eq!(back.a(), 1.0);
        assert_relative_eq!(back.b(), 2.0);
        assert_relative_eq!(back.c(), 3.0);
    }

    #[test]
    fn millimeter_round_trip() {
        let p = Cuboid::from_millimeters(1500.0, 250.0, 125.0).unwrap();
        let back = parse_cuboid(&p.format_as(LengthUnit::Millimeter)).unwrap();
        assert_relative_eq!(back.a(), 1.5, epsilon = 1e-9);
        assert_relative_eq!(back.b(), 0.25, epsilon = 1e-9);
        assert_relative_eq!(back.c(), 0.125, epsilon = 1e-9);
    }

    #[test]
    fn centimeter_strings_read_as_meters() {
        // "cm" contains an "m", so the sniffer picks meters and the
        // magnitudes overflow the 10 m ceiling.
        let p = Cuboid::from_meters(1.0, 2.0, 3.0).unwrap();
        let rendered = p.format_as(LengthUnit::Centimeter);
        assert!(matches!(
            parse_cuboid(&rendered),
            Err(CuboidError::EdgeOutOfRange { .. })
        ));

        // A 0.1 m cube renders as "10.0 cm" edges, which survive the
        // reread as 10 m edges.
        let q = Cuboid::default();
        let back = parse_cuboid(&q.format_as(LengthUnit::Centimeter)).unwrap();
        assert_relative_eq!(back.a(), 10.0);
    }

    #[test]
    fn missing_tokens() {
        assert!(matches!(
            parse_cuboid("1.000 m"),
            Err(CuboidError::MissingToken { position: 3 })
        ));
        // Splitting "" yields a single empty token, which fails numerically.
        assert!(matches!(
            parse_cuboid(""),
            Err(CuboidError::InvalidToken { .. })
        ));
    }

    #[test]
    fn non_numeric_tokens() {
        assert!(matches!(
            parse_cuboid("one m × 2.000 m × 3.000 m"),
            Err(CuboidError::InvalidToken { .. })
        ));
    }

    #[test]
    fn out_of_range_propagates() {
        assert!(matches!(
            parse_cuboid("11.000 m × 2.000 m × 3.000 m"),
            Err(CuboidError::EdgeOutOfRange { .. })
        ));
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let p: Cuboid = "1.000 m × 2.000 m × 3.000 m".parse().unwrap();
        assert_eq!(p, Cuboid::from_meters(1.0, 2.0, 3.0).unwrap());
    }
}
