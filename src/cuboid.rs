//! The cuboid value type.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CuboidError, CuboidResult};
use crate::unit::LengthUnit;

/// A rectangular cuboid with three positive edge lengths.
///
/// Edges are validated atomically at construction and stored in meters; a
/// value of this type can never hold an out-of-range edge. The three edges
/// are independent and unordered: a 1×2×3 cuboid keeps its edges exactly as
/// given, they are not sorted into a canonical order.
///
/// Equality compares the derived measures (volume, surface area, edge sum),
/// not the raw edges, so edge-permuted cuboids generally compare equal.
///
/// # Example
///
/// ```
/// use cuboid_types::{Cuboid, LengthUnit};
///
/// let p = Cuboid::new(&[1.0, 2.0, 3.0], LengthUnit::Meter)?;
///
/// assert!((p.volume() - 6.0).abs() < f64::EPSILON);
/// assert!((p.surface_area() - 22.0).abs() < f64::EPSILON);
/// assert!((p.edge(1)? - 2.0).abs() < f64::EPSILON);
/// # Ok::<(), cuboid_types::CuboidError>(())
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Cuboid {
    // Edge lengths in meters.
    a: f64,
    b: f64,
    c: f64,
}

impl Cuboid {
    /// Smallest accepted edge magnitude, in the unit the edge is given in.
    pub const MIN_EDGE: f64 = 0.1;

    /// Largest accepted edge length after conversion to meters.
    pub const MAX_EDGE_METERS: f64 = 10.0;

    /// Create a cuboid from up to three edge magnitudes in the given unit.
    ///
    /// Missing trailing edges default to the minimum legal length, 0.1 m,
    /// regardless of `unit`. Validation is atomic: if any magnitude is
    /// rejected, no cuboid is produced.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::EdgeOutOfRange`] if a magnitude is not finite,
    /// below 0.1 in `unit`, or above 10 m after conversion, and
    /// [`CuboidError::TooManyEdges`] if more than three magnitudes are given.
    ///
    /// # Example
    ///
    /// ```
    /// use cuboid_types::{Cuboid, LengthUnit};
    ///
    /// // Explicit edges are centimeters; the missing edge defaults to 0.1 m.
    /// let p = Cuboid::new(&[250.0, 90.0], LengthUnit::Centimeter)?;
    /// assert_eq!(p.to_array(), [2.5, 0.9, 0.1]);
    /// # Ok::<(), cuboid_types::CuboidError>(())
    /// ```
    pub fn new(edges: &[f64], unit: LengthUnit) -> CuboidResult<Self> {
        if edges.len() > 3 {
            return Err(CuboidError::TooManyEdges { count: edges.len() });
        }
        let mut meters = [Self::MIN_EDGE; 3];
        for (slot, &raw) in meters.iter_mut().zip(edges) {
            *slot = check_edge(raw, unit)?;
        }
        let [a, b, c] = meters;
        Ok(Self { a, b, c })
    }

    /// Create a cuboid from three edge lengths in meters.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::EdgeOutOfRange`] if any edge is outside
    /// `0.1..=10.0` meters.
    pub fn from_meters(a: f64, b: f64, c: f64) -> CuboidResult<Self> {
        Self::new(&[a, b, c], LengthUnit::Meter)
    }

    /// Create a cuboid from three edge lengths in centimeters.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::EdgeOutOfRange`] if any edge is below 0.1 cm
    /// or above 10 m converted.
    pub fn from_centimeters(a: f64, b: f64, c: f64) -> CuboidResult<Self> {
        Self::new(&[a, b, c], LengthUnit::Centimeter)
    }

    /// Create a cuboid from three edge lengths in millimeters.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::EdgeOutOfRange`] if any edge is below 0.1 mm
    /// or above 10 m converted.
    pub fn from_millimeters(a: f64, b: f64, c: f64) -> CuboidResult<Self> {
        Self::new(&[a, b, c], LengthUnit::Millimeter)
    }

    /// Edge `a` in meters.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Edge `b` in meters.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Edge `c` in meters.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Edge by index, in meters: 0 → `a`, 1 → `b`, 2 → `c`.
    ///
    /// # Errors
    ///
    /// Returns [`CuboidError::IndexOutOfBounds`] for any other index.
    pub const fn edge(&self, index: usize) -> CuboidResult<f64> {
        match index {
            0 => Ok(self.a),
            1 => Ok(self.b),
            2 => Ok(self.c),
            _ => Err(CuboidError::IndexOutOfBounds { index }),
        }
    }

    /// The three edges in meters as `[a, b, c]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges in meters as a vector.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vector3::new is not const in nalgebra
    pub fn extent(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Iterate over the three edges in meters, in `a`, `b`, `c` order.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// Volume in cubic meters, rounded to 9 decimal places.
    #[must_use]
    pub fn volume(&self) -> f64 {
        round_to(self.a * self.b * self.c, 9)
    }

    /// Surface area in square meters, rounded to 6 decimal places.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        round_to(2.0 * (self.a * self.b + self.a * self.c + self.b * self.c), 6)
    }

    /// Sum of the three edges in meters, unrounded.
    #[must_use]
    pub fn edge_sum(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Length of the shortest edge in meters.
    #[must_use]
    pub fn min_edge(&self) -> f64 {
        self.a.min(self.b).min(self.c)
    }

    /// Length of the longest edge in meters.
    #[must_use]
    pub fn max_edge(&self) -> f64 {
        self.a.max(self.b).max(self.c)
    }

    /// Space diagonal in meters.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.extent().norm()
    }

    /// Rank two cuboids from largest to smallest.
    ///
    /// Cuboids rank together when **any one** of volume, surface area, or
    /// edge sum matches exactly. Otherwise the loser of the volume
    /// comparison ranks after the winner, falling back to surface area and
    /// then edge sum; a cuboid that wins every measure ranks first.
    ///
    /// The any-measure shortcut makes this relation coarser than [`PartialEq`]
    /// and non-transitive, so it is not a total order; `Cuboid` implements
    /// neither `PartialOrd` nor `Ord`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use cuboid_types::Cuboid;
    ///
    /// let small = Cuboid::from_meters(1.0, 1.0, 1.0)?;
    /// let large = Cuboid::from_meters(2.0, 2.0, 2.0)?;
    ///
    /// assert_eq!(small.cmp_size(&large), Ordering::Greater);
    /// assert_eq!(large.cmp_size(&small), Ordering::Less);
    /// # Ok::<(), cuboid_types::CuboidError>(())
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)] // exact match on the rounded measures is the contract
    pub fn cmp_size(&self, other: &Self) -> Ordering {
        if self.volume() == other.volume()
            || self.surface_area() == other.surface_area()
            || self.edge_sum() == other.edge_sum()
        {
            Ordering::Equal
        } else if self.volume() < other.volume() {
            Ordering::Greater
        } else if self.surface_area() < other.surface_area() {
            Ordering::Greater
        } else if self.edge_sum() < other.edge_sum() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// Validate one raw magnitude and convert it to meters.
fn check_edge(raw: f64, unit: LengthUnit) -> CuboidResult<f64> {
    if !raw.is_finite() || raw < Cuboid::MIN_EDGE {
        return Err(CuboidError::edge_out_of_range(raw, unit));
    }
    let meters = unit.to_meters(raw);
    if meters > Cuboid::MAX_EDGE_METERS {
        return Err(CuboidError::edge_out_of_range(raw, unit));
    }
    Ok(meters)
}

/// Round to `digits` decimal places.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// The minimum cuboid: 0.1 m on every edge.
impl Default for Cuboid {
    fn default() -> Self {
        Self {
            a: Self::MIN_EDGE,
            b: Self::MIN_EDGE,
            c: Self::MIN_EDGE,
        }
    }
}

/// Cuboids are equal when volume, surface area, and edge sum all match
/// exactly. All three measures are symmetric in the edges, so cuboids whose
/// edges are permutations of each other compare equal (up to float rounding
/// of the sums and products involved).
impl PartialEq for Cuboid {
    #[allow(clippy::float_cmp)] // exact match on the rounded measures is the contract
    fn eq(&self, other: &Self) -> bool {
        self.volume() == other.volume()
            && self.surface_area() == other.surface_area()
            && self.edge_sum() == other.edge_sum()
    }
}

/// Hash of the edge multiset: the three edge bit patterns are summed, so
/// cuboids with identical (or permuted) edges always hash alike. Equality is
/// defined on derived measures and is slightly coarser, so hash agreement
/// beyond the edge multiset is not guaranteed.
impl Hash for Cuboid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bits = self
            .a
            .to_bits()
            .wrapping_add(self.b.to_bits())
            .wrapping_add(self.c.to_bits());
        state.write_u64(bits);
    }
}

/// Pairwise sum of edges, revalidated as meters.
impl Add for Cuboid {
    type Output = CuboidResult<Cuboid>;

    /// # Errors
    ///
    /// Returns [`CuboidError::EdgeOutOfRange`] if any summed edge leaves the
    /// legal meter range; the full construction checks rerun on the sums.
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            &[self.a + rhs.a, self.b + rhs.b, self.c + rhs.c],
            LengthUnit::Meter,
        )
    }
}

/// Meter triples, validated.
impl TryFrom<[f64; 3]> for Cuboid {
    type Error = CuboidError;

    fn try_from(edges: [f64; 3]) -> CuboidResult<Self> {
        Self::new(&edges, LengthUnit::Meter)
    }
}

/// Integer triples are read as millimeters.
impl TryFrom<(u32, u32, u32)> for Cuboid {
    type Error = CuboidError;

    fn try_from((a, b, c): (u32, u32, u32)) -> CuboidResult<Self> {
        Self::from_millimeters(f64::from(a), f64::from(b), f64::from(c))
    }
}

impl From<Cuboid> for [f64; 3] {
    fn from(cuboid: Cuboid) -> Self {
        cuboid.to_array()
    }
}

impl IntoIterator for Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}
