use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParsePointError;

/// A 2D point `(x, y)`: the constraint `p(x) = y` on an interpolant.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `x,y`, trimming whitespace around each component.
    ///
    /// Every component is parsed before the arity is checked, so a bad
    /// coordinate is reported even when there are too many of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|source| {
                    ParsePointError::InvalidCoordinate {
                        text: part.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match coords[..] {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(ParsePointError::WrongArity(coords.len())),
        }
    }
}
