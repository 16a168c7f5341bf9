use std::fmt;
use serde::{Serialize, Deserialize};
use strum::EnumIter;

use crate::geo_3d::Scalar;

/// An integer point in 2D space.
/// Produced by dropping z from a `Vector3` and rounding x and y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}
impl Point2D {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Point2D{x, y}
    }
}
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rounding rule for scalar to integer conversion.
/// Out of range values saturate at the `i32` bounds, NaN becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
#[derive(Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Shift by 0.5 away from zero, then truncate: -2.5 -> -3, 2.5 -> 3.
    #[default]
    HalfAwayFromZero,
    /// Always add 0.5, then truncate: -2.5 -> -2, -2.6 -> -2.
    /// Kept for coordinates produced by older callers.
    LegacyHalfUp,
}
impl Rounding {
    /// Round a scalar to an integer.
    pub fn round(&self, value: Scalar) -> i32 {
        match self {
            Rounding::HalfAwayFromZero => {
                let shifted = if value < 0.0 { value - 0.5 } else { value + 0.5 };
                shifted as i32
            },
            Rounding::LegacyHalfUp => (value + 0.5) as i32,
        }
    }
}
