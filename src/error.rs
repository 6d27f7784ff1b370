//! Error types for cuboid operations.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::unit::LengthUnit;

/// Result type alias for cuboid operations.
pub type CuboidResult<T> = Result<T, CuboidError>;

/// Errors that can occur while constructing, indexing, formatting, or
/// parsing a cuboid.
#[derive(Debug, Error)]
pub enum CuboidError {
    /// Edge magnitude below the per-unit minimum or above 10 m converted.
    #[error("edge length {value} {unit} is out of range (min 0.1 {unit}, max 10 m)")]
    EdgeOutOfRange {
        /// The rejected raw magnitude, in `unit`.
        value: f64,
        /// Unit the magnitude was given in.
        unit: LengthUnit,
    },

    /// More edge magnitudes than a cuboid has edges.
    #[error("expected at most 3 edge lengths, got {count}")]
    TooManyEdges {
        /// Number of magnitudes supplied.
        count: usize,
    },

    /// Edge index outside `0..=2`.
    #[error("edge index {index} is out of bounds (expected 0..=2)")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// Unrecognized format string (not `"m"`, `"cm"`, or `"mm"`).
    #[error("unknown format: {format:?}")]
    UnknownFormat {
        /// The unrecognized format string.
        format: String,
    },

    /// A token expected by the parser was absent.
    #[error("missing token at position {position}")]
    MissingToken {
        /// Whitespace-delimited position of the missing token.
        position: usize,
    },

    /// A token expected to be numeric failed to parse.
    #[error("invalid numeric token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Underlying float parse failure.
        source: ParseFloatError,
    },
}

impl CuboidError {
    /// Create an out-of-range error for a rejected magnitude.
    #[must_use]
    pub const fn edge_out_of_range(value: f64, unit: LengthUnit) -> Self {
        Self::EdgeOutOfRange { value, unit }
    }

    /// Create an unknown-format error.
    #[must_use]
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
        }
    }
}
