//! Lagrange interpolation over real points.
//!
//! For points `(x_0, y_0), ..., (x_{n-1}, y_{n-1})` with distinct `x_i` the
//! interpolant is `sum_i y_i * L_i(x)` where the basis term `L_i` is the
//! product of `(x - x_j) / (x_i - x_j)` over every `j != i`. Each step is an
//! ordinary [`Polynomial`] product or sum, so the whole routine is O(n²)
//! polynomial operations.
//!
//! Duplicate detection compares `x` values with exact `==`: values that differ
//! only by rounding are treated as distinct.

use log::{debug, trace};

use crate::error::InterpolationError;
use crate::point::Point;
use crate::poly::{self, Polynomial};

/// The unique polynomial of degree below `points.len()` passing through every
/// point.
///
/// Points are folded in input order. Fails with
/// [`InterpolationError::ZeroPoints`] for an empty slice and with
/// [`InterpolationError::NonDistinctX`] carrying the first repeated `x`
/// found scanning left to right.
pub fn interpolate(points: &[Point]) -> Result<Polynomial, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::ZeroPoints);
    }
    ensure_distinct_x(points)?;

    debug!("interpolating {} points", points.len());
    let result = points
        .iter()
        .enumerate()
        .map(|(i, point)| term(points, i, point))
        .fold(Polynomial::zero(), |acc, t| poly::add(&acc, &t));
    debug!("interpolant has degree {:?}", result.degree());

    Ok(result)
}

/// Lagrange basis polynomial for `points[i]`: `1` at `x_i`, `0` at every
/// other `x_j`. Returns `None` when `i` is out of bounds.
///
/// Assumes the `x` values are distinct; a repeated `x` divides by zero and
/// yields non-finite coefficients.
pub fn basis(points: &[Point], i: usize) -> Option<Polynomial> {
    points.get(i).map(|point| lagrange_basis(points, i, point.x))
}

fn lagrange_basis(points: &[Point], i: usize, xi: f64) -> Polynomial {
    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(Polynomial::one(), |acc, (_, p)| {
            let denominator = xi - p.x;
            let factor =
                Polynomial::new(vec![-p.x / denominator, 1.0 / denominator]);
            poly::multiply(&acc, &factor)
        })
}

/// Basis term scaled by `y_i`.
fn term(points: &[Point], i: usize, point: &Point) -> Polynomial {
    let t = lagrange_basis(points, i, point.x).scale(point.y);
    trace!("term {i} for {point}: {t}");
    t
}

/// `f64` is not `Hash`, so previously seen values are scanned with `==`:
/// `-0.0` collides with `0.0` and NaN never collides.
fn ensure_distinct_x(points: &[Point]) -> Result<(), InterpolationError> {
    let mut seen = Vec::with_capacity(points.len());
    for p in points {
        if seen.iter().any(|&x| x == p.x) {
            debug!("rejecting duplicate x value {}", p.x);
            return Err(InterpolationError::NonDistinctX(p.x));
        }
        seen.push(p.x);
    }
    Ok(())
}
