use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Neg,
};
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{serde_scalar, Scalar, Point2D, Rounding, EPSILON, ONE};

/// A vector in 3D space.
/// Doubles as a point, and as a screen/grid coordinate through `to_point2d`.
/// Division by zero and normalization of the zero vector do not panic,
/// the components become Inf or NaN instead (see `has_nan`).
#[derive(Debug, Clone, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub struct Vector3 {
    #[serde(with = "serde_scalar")]
    pub x: Scalar,
    #[serde(with = "serde_scalar")]
    pub y: Scalar,
    #[serde(with = "serde_scalar")]
    pub z: Scalar,
}
impl Vector3 {
    /// Create a new vector.
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Vector3{x, y, z}
    }

    /// Create a vector with every component set to `s`.
    pub fn splat(s: Scalar) -> Self {
        Vector3{x: s, y: s, z: s}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        Vector3::splat(0.0)
    }

    /// Get the magnitude squared of the vector.
    /// Cheaper than `length` for comparisons.
    pub fn length_sq(&self) -> Scalar {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn length(&self) -> Scalar {
        self.length_sq().sqrt()
    }

    /// Get the distance squared between two vectors.
    pub fn distance_sq(&self, other: &Vector3) -> Scalar {
        (*self - *other).length_sq()
    }

    /// Get the distance between two vectors.
    pub fn distance(&self, other: &Vector3) -> Scalar {
        (*self - *other).length()
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &Vector3) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the (right-handed) cross product of two vectors.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the unsigned area of the parallelogram spanned by two vectors.
    pub fn area(&self, other: &Vector3) -> Scalar {
        self.cross(other).length()
    }

    /// Get a unit vector with the same direction, leaving `self` untouched.
    pub fn unit(&self) -> Vector3 {
        let mut unit = *self;
        unit.normalize();
        unit
    }

    /// Scale the vector to unit length in place.
    /// Returns the length before normalization.
    pub fn normalize(&mut self) -> Scalar {
        let mag = self.length();
        *self *= ONE / mag;
        mag
    }

    /// Set every component to zero.
    pub fn set_zero(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Check if all components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Drop z and round x and y half away from zero.
    pub fn to_point2d(&self) -> Point2D {
        self.to_point2d_with(Rounding::HalfAwayFromZero)
    }

    /// Drop z and round x and y with the given rounding rule.
    pub fn to_point2d_with(&self, rounding: Rounding) -> Point2D {
        Point2D::new(rounding.round(self.x), rounding.round(self.y))
    }
}
impl PartialEq for Vector3 {
    /// Same reference, or every component within `EPSILON`.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (
            (self.x - other.x).abs() < EPSILON &&
            (self.y - other.y).abs() < EPSILON &&
            (self.z - other.z).abs() < EPSILON
        )
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut w = self;
        w += other;
        w
    }
}
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut w = self;
        w -= other;
        w
    }
}
impl MulAssign<Scalar> for Vector3 {
    fn mul_assign(&mut self, other: Scalar) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
impl Mul<Scalar> for Vector3 {
    type Output = Vector3;

    fn mul(self, other: Scalar) -> Vector3 {
        let mut w = self;
        w *= other;
        w
    }
}
impl Mul<Vector3> for Scalar {
    type Output = Vector3;

    fn mul(self, other: Vector3) -> Vector3 {
        other * self
    }
}
/// `a * b` between two vectors is the dot product, not a component-wise product.
impl Mul for Vector3 {
    type Output = Scalar;

    fn mul(self, other: Vector3) -> Scalar {
        self.dot(&other)
    }
}
impl DivAssign<Scalar> for Vector3 {
    /// Multiplies by the reciprocal, so a zero divisor gives Inf/NaN.
    fn div_assign(&mut self, other: Scalar) {
        *self *= ONE / other;
    }
}
impl Div<Scalar> for Vector3 {
    type Output = Vector3;

    fn div(self, other: Scalar) -> Vector3 {
        let mut w = self;
        w /= other;
        w
    }
}
impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.0
    }
}
impl From<[Scalar; 3]> for Vector3 {
    fn from(xyz: [Scalar; 3]) -> Self {
        Vector3{x: xyz[0], y: xyz[1], z: xyz[2]}
    }
}
impl From<Vector3> for [Scalar; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

/// Error from parsing a vector out of an `x,y,z` string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseVectorError {
    pub input: String,
}
impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected a vector as \"x,y,z\", got \"{}\"", self.input)
    }
}
impl std::error::Error for ParseVectorError {}

impl FromStr for Vector3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVectorError{input: s.to_string()};
        let components = s.split(',')
            .map(|c| c.trim().parse::<Scalar>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;
        match components[..] {
            [x, y, z] => Ok(Vector3{x, y, z}),
            _ => Err(err()),
        }
    }
}
