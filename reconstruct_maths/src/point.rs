use std::collections::HashSet;
use std::fmt;

use num::BigInt;

use crate::lagrange::{self, InterpolationError};

/// A solution `y = f(x)` of the secret polynomial `f`. `x` is the one-based index of the share and `y` its decoded
/// value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<BigInt>,
        Y: Into<BigInt>,
    {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

/// Returns the first abscissa that occurs more than once in `points`, if any.
pub(crate) fn find_duplicate_abscissa(points: &[Point]) -> Option<&BigInt> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().map(|p| &p.x).find(|x| !seen.insert(*x))
}

/// An ordered collection of points with pairwise distinct abscissae.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Collect `points` into a set. Fails with `DuplicateAbscissa` if two points share an `x` coordinate, since such
    /// a set does not determine a polynomial.
    pub fn new(points: Vec<Point>) -> Result<Self, InterpolationError> {
        if let Some(x) = find_duplicate_abscissa(&points) {
            return Err(InterpolationError::DuplicateAbscissa(x.clone()));
        }
        Ok(PointSet { points })
    }

    /// Sort the points ascending by `x` and keep the first `count` of them. The result is always the same subset
    /// for the same input, independent of the original order.
    pub fn select_lowest(mut self, count: usize) -> PointSet {
        self.points.sort_by(|a, b| a.x.cmp(&b.x));
        self.points.truncate(count);
        self
    }

    /// Evaluate the unique polynomial of minimal degree through these points at `target`.
    pub fn interpolate_at(&self, target: &BigInt) -> Result<BigInt, InterpolationError> {
        lagrange::interpolate_at(&self.points, target)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl AsRef<[Point]> for PointSet {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}
