pub use crate::{point, points, poly};
pub use crate::{
    error::{InterpolationError, MathError, ParsePointError},
    interpolation::interpolate,
    point::Point,
    poly::Polynomial,
};
