//! Free functions mirroring the `Vector3` methods.

use crate::geo_3d::{Scalar, Vector3};

/// Magnitude squared of a vector.
#[inline]
pub fn mag_sq(v: &Vector3) -> Scalar {
    v.length_sq()
}

/// Magnitude of a vector.
#[inline]
pub fn mag(v: &Vector3) -> Scalar {
    v.length()
}

/// Distance squared between two vectors.
#[inline]
pub fn distance_sq(l: &Vector3, r: &Vector3) -> Scalar {
    mag_sq(&(*l - *r))
}

/// Distance between two vectors.
#[inline]
pub fn distance(l: &Vector3, r: &Vector3) -> Scalar {
    mag(&(*l - *r))
}

#[inline]
pub fn dot(l: &Vector3, r: &Vector3) -> Scalar {
    l.dot(r)
}

#[inline]
pub fn cross(l: &Vector3, r: &Vector3) -> Vector3 {
    l.cross(r)
}

/// The zero vector.
#[inline]
pub fn zero() -> Vector3 {
    Vector3::splat(0.0)
}

/// Unit vector in the direction of `v`. NaN components if `v` has zero length.
#[inline]
pub fn unit(v: &Vector3) -> Vector3 {
    let mut r = *v;
    r.normalize();
    r
}

/// Unsigned area of the parallelogram formed by two vectors,
/// i.e. the magnitude of their cross product.
#[inline]
pub fn area(l: &Vector3, r: &Vector3) -> Scalar {
    mag(&cross(l, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn check_mirrors_methods() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);

        assert_eq!(mag_sq(&a), a.length_sq());
        assert_eq!(mag(&a), a.length());
        assert_eq!(distance_sq(&a, &b), a.distance_sq(&b));
        assert_eq!(distance(&a, &b), a.distance(&b));
        assert_eq!(dot(&a, &b), a * b);
        assert_eq!(cross(&a, &b), a.cross(&b));
        assert_eq!(unit(&a), a.unit());
        assert_eq!(area(&a, &b), mag(&cross(&a, &b)));
        assert!(zero().is_zero());
    }

    #[test]
    fn check_scenarios() {
        let xhat = Vector3::new(1.0, 0.0, 0.0);
        let yhat = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(dot(&xhat, &yhat), 0.0);
        assert_eq!(cross(&xhat, &yhat), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(mag(&Vector3::new(3.0, 4.0, 0.0)), 5.0);
        assert_abs_diff_eq!(area(&(xhat * 2.0), &(yhat * 3.0)), 6.0);
    }

    #[test]
    fn check_unit_of_zero() {
        assert!(unit(&zero()).has_nan());
    }
}
