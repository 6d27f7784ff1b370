//! Unit-aware rectangular cuboid value types.
//!
//! This crate provides a small set of value types for working with
//! rectangular cuboids (three positive edge lengths):
//!
//! - [`Cuboid`] - An immutable cuboid with edges stored in meters
//! - [`LengthUnit`] - Millimeter / centimeter / meter construction units
//! - [`CuboidError`] - Errors from construction, indexing, formatting, parsing
//! - [`parse_cuboid`] - Adapter that reads cuboids back out of rendered text
//!
//! # Units
//!
//! Edge lengths are **always stored in meters**, whatever unit they were
//! given in. A [`LengthUnit`] only interprets raw magnitudes at construction
//! time; it is not part of the value. Every edge must be at least 0.1 in its
//! construction unit and at most 10 m after conversion.
//!
//! # Immutability
//!
//! A [`Cuboid`] is validated once, atomically, and never changes afterwards.
//! Instances are `Copy` and safe to share freely across threads.
//!
//! # Example
//!
//! ```
//! use cuboid_types::{Cuboid, LengthUnit};
//!
//! let shoebox = Cuboid::new(&[350.0, 250.0, 140.0], LengthUnit::Millimeter)?;
//!
//! assert!((shoebox.volume() - 0.01225).abs() < 1e-12);
//! assert_eq!(shoebox.to_string(), "0.350 m × 0.250 m × 0.140 m");
//! # Ok::<(), cuboid_types::CuboidError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cuboid;
mod error;
mod format;
mod parse;
mod unit;

pub use cuboid::Cuboid;
pub use error::{CuboidError, CuboidResult};
pub use parse::parse_cuboid;
pub use unit::LengthUnit;

// Re-export the nalgebra vector type returned by `Cuboid::extent`.
pub use nalgebra::Vector3;
