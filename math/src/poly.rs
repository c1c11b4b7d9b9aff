//! Polynomials over the reals with `f64` coefficients.
//!
//! A [`Polynomial`] is always kept in canonical form: coefficients are stored
//! in ascending order of power and the highest stored coefficient is never
//! exactly `0.0`. The zero polynomial has no coefficients at all. Every
//! constructor and every arithmetic operation re-establishes this, so two
//! polynomials are equal exactly when their coefficient slices are equal.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::EitherOrBoth;
use itertools::Itertools;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::error::InterpolationError;
use crate::interpolation;
use crate::point::Point;

/// Decimal places used by [`Display`](fmt::Display) when the formatter
/// carries no explicit precision.
pub const DEFAULT_DISPLAY_PRECISION: usize = 1;

/// A polynomial with real coefficients, constant term first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from coefficients ordered from the constant term
    /// upward, dropping trailing coefficients that are exactly zero.
    pub fn new(mut coefficients: Vec<f64>) -> Self {
        let len = coefficients
            .iter()
            .rposition(|&c| c != 0.0)
            .map_or(0, |top| top + 1);
        coefficients.truncate(len);
        Self { coefficients }
    }

    /// The zero polynomial, with an empty coefficient list.
    pub const fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    pub fn one() -> Self {
        Self::constant(1.0)
    }

    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    /// Number of stored coefficients; `0` for the zero polynomial.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Same as [`is_zero`](Self::is_zero): only the zero polynomial stores
    /// no coefficients.
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn leading_coefficient(&self) -> Option<f64> {
        self.coefficients.last().copied()
    }

    /// Evaluate at `x` using Horner's rule.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Multiply by the constant polynomial `[factor]`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        multiply(self, &Self::constant(factor))
    }

    /// The unique polynomial of lowest degree through `points`.
    ///
    /// See [`interpolation::interpolate`].
    pub fn interpolate(points: &[Point]) -> Result<Self, InterpolationError> {
        interpolation::interpolate(points)
    }

    fn combine(a: &Self, b: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let raw = a
            .coefficients
            .iter()
            .zip_longest(b.coefficients.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(&l, &r) => op(l, r),
                EitherOrBoth::Left(&l) => op(l, 0.0),
                EitherOrBoth::Right(&r) => op(0.0, r),
            })
            .collect();
        Self::new(raw)
    }
}

/// Coefficient-wise sum of `a` and `b`.
pub fn add(a: &Polynomial, b: &Polynomial) -> Polynomial {
    Polynomial::combine(a, b, |l, r| l + r)
}

/// Coefficient-wise difference `a - b`.
pub fn subtract(a: &Polynomial, b: &Polynomial) -> Polynomial {
    Polynomial::combine(a, b, |l, r| l - r)
}

/// Schoolbook product of `a` and `b`.
pub fn multiply(a: &Polynomial, b: &Polynomial) -> Polynomial {
    if a.is_zero() && b.is_zero() {
        return Polynomial::zero();
    }

    let mut product = vec![0.0; a.len() + b.len() - 1];
    for (i, &lhs) in a.coefficients.iter().enumerate() {
        for (j, &rhs) in b.coefficients.iter().enumerate() {
            product[i + j] += lhs * rhs;
        }
    }

    Polynomial::new(product)
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial {
    fn from(coefficients: [f64; N]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

/// Renders terms in ascending power, e.g. `1.0 + 2.0x - 3.0x^2`.
///
/// One decimal place is printed unless the formatter asks for another
/// precision (`{:.3}`).
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        let constant = self.coefficients.first().copied().unwrap_or(0.0);
        write!(f, "{constant:.precision$}")?;

        for (power, &c) in self.coefficients.iter().enumerate().skip(1) {
            let (sign, magnitude) = if c < 0.0 { ('-', -c) } else { ('+', c) };
            write!(f, " {sign} {magnitude:.precision$}x")?;
            if power > 1 {
                write!(f, "^{power}")?;
            }
        }

        Ok(())
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $func(&self, &rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $func(&self, rhs)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $func(self, &rhs)
            }
        }

        impl $trait for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $func(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
impl_binary_op!(Mul, mul, multiply);

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        subtract(&Self::zero(), &self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        subtract(&Polynomial::zero(), self)
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| add(&acc, &p))
    }
}

impl<'a> Sum<&'a Polynomial> for Polynomial {
    fn sum<I: Iterator<Item = &'a Polynomial>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| add(&acc, p))
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
