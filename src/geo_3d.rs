mod vector;
mod point;
pub mod vec;
pub mod serde_scalar;

pub use vector::{
    Vector3,
    ParseVectorError,
};
pub use point::{
    Point2D,
    Rounding,
};

/// Scalar type (alias for f64, or f32 with the `single-precision` feature).
#[cfg(not(feature = "single-precision"))]
pub type Scalar = f64;
/// Scalar type (alias for f64, or f32 with the `single-precision` feature).
#[cfg(feature = "single-precision")]
pub type Scalar = f32;

/// Per-axis tolerance for vector equality.
pub(crate) const EPSILON: Scalar = 1.0e-6;

/// Numerator for reciprocals.
const ONE: Scalar = 1.0;
