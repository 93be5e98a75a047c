//! Exact Lagrange interpolation over the rationals.
//!
//! The value of the interpolating polynomial at an integer target is an integer whenever the points lie on an
//! integer-valued polynomial, but the individual Lagrange terms generally are not. Terms are therefore accumulated as
//! reduced fractions and integrality is only demanded of the final sum.

use num::{BigInt, BigRational, One, Zero};
use thiserror::Error;

use crate::point::{find_duplicate_abscissa, Point};

/// Errors raised while interpolating a point set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("cannot interpolate an empty point set")]
    EmptyPointSet,

    #[error("more than one point has the abscissa {0}")]
    DuplicateAbscissa(BigInt),

    #[error("interpolated value {numerator}/{denominator} is not an integer, the shares are inconsistent")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// Evaluate the unique polynomial of minimal degree passing through all `points` at `target`, using the Lagrange
/// basis directly instead of computing coefficients.
/// #Parameters:
/// - `points` a non-empty slice of points with pairwise distinct `x`. Their order does not matter.
/// - `target` the abscissa to evaluate the polynomial at; `0` yields the constant term.
///
/// #Output
/// The exact value at `target`, or `NonIntegerResult` if that value is not an integer.
pub fn interpolate_at(points: &[Point], target: &BigInt) -> Result<BigInt, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyPointSet);
    }

    if let Some(x) = find_duplicate_abscissa(points) {
        return Err(InterpolationError::DuplicateAbscissa(x.clone()));
    }

    let sum = points
        .iter()
        .enumerate()
        .map(|(i, point)| lagrange_term(points, i, point, target))
        .fold(BigRational::zero(), |acc, term| acc + term);

    if sum.is_integer() {
        Ok(sum.to_integer())
    } else {
        let (numerator, denominator) = sum.into_raw();
        Err(InterpolationError::NonIntegerResult {
            numerator,
            denominator,
        })
    }
}

/// `y_i * Π (target - x_j) / Π (x_i - x_j)` over all `j != i`, as a reduced fraction. The denominator is non-zero as
/// long as all abscissae are distinct.
fn lagrange_term(points: &[Point], i: usize, point: &Point, target: &BigInt) -> BigRational {
    let (numerator, denominator) = points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(
            (BigInt::one(), BigInt::one()),
            |(numerator, denominator), (_, other)| {
                (
                    numerator * (target - &other.x),
                    denominator * (&point.x - &other.x),
                )
            },
        );

    BigRational::new(&point.y * numerator, denominator)
}
