//! A crate containing the exact arithmetic used to reconstruct a threshold-shared secret: decoding share values given
//! in arbitrary radices into big integers and evaluating the interpolating polynomial through a set of shares with
//! exact rational Lagrange interpolation.

pub mod lagrange;
pub mod point;
pub mod radix;

pub use lagrange::{interpolate_at, InterpolationError};
pub use point::{Point, PointSet};
pub use radix::{decode, Radix, RadixError};
