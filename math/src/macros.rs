//! Shared macros for constructing polynomials and points.
//!
//! Every numeric argument is converted with `as f64`, so integer and float
//! literals can be mixed freely.

/// Construct a canonical [`Polynomial`](crate::poly::Polynomial) from
/// coefficients, constant term first.
///
/// ```
/// use lagrange_math::prelude::*;
///
/// let p = poly![1, 2, 3, 0];
/// assert_eq!(p.coefficients(), &[1.0, 2.0, 3.0]);
/// assert!(poly![].is_zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::Polynomial::zero()
    }};
    ($val:expr; $count:expr) => {{
        $crate::poly::Polynomial::new(vec![($val) as f64; $count])
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::new(vec![$(($coeff) as f64),+])
    }};
}

/// Construct a [`Point`](crate::point::Point).
///
/// ```
/// use lagrange_math::prelude::*;
///
/// assert_eq!(point!(1, 2.5), Point::new(1.0, 2.5));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr $(,)?) => {
        $crate::point::Point::new(($x) as f64, ($y) as f64)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use lagrange_math::prelude::*;
///
/// let pts = points![(1, 2), (2, 3)];
/// assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(2.0, 3.0)]);
/// ```
#[macro_export]
macro_rules! points {
    () => {
        ::std::vec::Vec::<$crate::point::Point>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::point!($x, $y)),+]
    };
}
