//! Real-coefficient polynomial arithmetic and Lagrange interpolation.
//!
//! ```
//! use lagrange_math::prelude::*;
//!
//! let p = interpolate(&points![(1, 2), (2, 5), (3, 2)]).unwrap();
//! assert_eq!("-7.0 + 12.0x - 3.0x^2", p.to_string());
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod interpolation;
pub mod point;
pub mod poly;
pub mod prelude;

pub use error::{MathError, Result};
pub use point::Point;
pub use poly::Polynomial;
