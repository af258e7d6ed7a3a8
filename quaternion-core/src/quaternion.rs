//! Quaternion algebra
//!
//! A quaternion q = a + bi + cj + dk is stored as four `f64` components.
//! Values are immutable: every operation returns a new quaternion and the
//! components are only reachable through accessors.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;
use crate::TOLERANCE;

/// A quaternion q = a + bi + cj + dk
///
/// Equality is approximate: two quaternions are equal when every pair of
/// components differs by less than [`TOLERANCE`]. This relation is not
/// transitive, and a quaternion holding NaN is not equal to itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// Tolerance comparison of two scalars: `|x - y| < TOLERANCE`
#[inline]
pub fn components_match(x: f64, y: f64) -> bool {
    (x - y).abs() < TOLERANCE
}

impl Quaternion {
    /// Create a new quaternion from its real part and the i, j, k coefficients
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Zero quaternion
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Real part
    #[inline]
    pub fn real(&self) -> f64 {
        self.a
    }

    /// Imaginary part i
    #[inline]
    pub fn i(&self) -> f64 {
        self.b
    }

    /// Imaginary part j
    #[inline]
    pub fn j(&self) -> f64 {
        self.c
    }

    /// Imaginary part k
    #[inline]
    pub fn k(&self) -> f64 {
        self.d
    }

    /// True if every component is within tolerance of zero
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Conjugate: a - bi - cj - dk
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Opposite: -a - bi - cj - dk
    pub fn opposite(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// Componentwise sum `self + q`
    pub fn plus(&self, q: &Self) -> Self {
        Self::new(self.a + q.a, self.b + q.b, self.c + q.c, self.d + q.d)
    }

    /// Componentwise difference `self - q`
    pub fn minus(&self, q: &Self) -> Self {
        Self::new(self.a - q.a, self.b - q.b, self.c - q.c, self.d - q.d)
    }

    /// Hamilton product `self * q`
    ///
    /// ```text
    /// (a1a2 - b1b2 - c1c2 - d1d2)
    /// + (a1b2 + b1a2 + c1d2 - d1c2)i
    /// + (a1c2 - b1d2 + c1a2 + d1b2)j
    /// + (a1d2 + b1c2 - c1b2 + d1a2)k
    /// ```
    pub fn times(&self, q: &Self) -> Self {
        Self::new(
            self.a * q.a - self.b * q.b - self.c * q.c - self.d * q.d,
            self.a * q.b + self.b * q.a + self.c * q.d - self.d * q.c,
            self.a * q.c - self.b * q.d + self.c * q.a + self.d * q.b,
            self.a * q.d + self.b * q.c - self.c * q.b + self.d * q.a,
        )
    }

    /// Multiply every component by the real coefficient `r`
    pub fn scale(&self, r: f64) -> Self {
        Self::new(self.a * r, self.b * r, self.c * r, self.d * r)
    }

    /// Squared norm (a² + b² + c² + d²)
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Norm (Euclidean length of the four components)
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Inverse: conjugate / norm²
    ///
    /// Fails with [`QuaternionError::Division`](crate::QuaternionError::Division)
    /// when `self` is zero under the tolerance predicate.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(crate::QuaternionError::division(self.to_string()));
        }
        let n2 = self.norm_squared();
        Ok(Self::new(
            self.a / n2,
            -self.b / n2,
            -self.c / n2,
            -self.d / n2,
        ))
    }

    /// Right quotient `self * inverse(q)`
    pub fn divide_by_right(&self, q: &Self) -> Result<Self> {
        let inv = q.inverse()?;
        Ok(self.times(&inv))
    }

    /// Left quotient `inverse(q) * self`
    pub fn divide_by_left(&self, q: &Self) -> Result<Self> {
        let inv = q.inverse()?;
        Ok(inv.times(self))
    }

    /// Quaternion-valued dot product: (p * conj(q) + q * conj(p)) / 2
    pub fn dot_mult(&self, q: &Self) -> Self {
        self.times(&q.conjugate())
            .plus(&q.times(&self.conjugate()))
            .scale(0.5)
    }

    /// Stable SHA-256 digest (hex) of the formatted quaternion
    ///
    /// Two quaternions share a fingerprint exactly when they format to the
    /// same string, so values that are equal by tolerance but differ in
    /// printed digits get different fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        components_match(self.a, other.a)
            && components_match(self.b, other.b)
            && components_match(self.c, other.c)
            && components_match(self.d, other.d)
    }
}

impl Eq for Quaternion {}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(&rhs)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(&rhs)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product
    fn mul(self, rhs: Self) -> Self {
        self.times(&rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuaternionError;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let q = Quaternion::new(12.0, -34.0, 1.0, 5.0);
        assert_eq!(q.real(), 12.0);
        assert_eq!(q.i(), -34.0);
        assert_eq!(q.j(), 1.0);
        assert_eq!(q.k(), 5.0);
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let q = Quaternion::new(1.0, -2.0, -1.0, 2.0);
        let c = q.clone();
        assert_eq!(c, q);
        assert!(!std::ptr::eq(&c, &q));
    }

    #[test]
    fn test_conjugate_and_opposite() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let qc = q.conjugate();
        assert_eq!(qc.real(), 1.0);
        assert_eq!(qc.i(), -2.0);
        assert_eq!(qc.j(), -3.0);
        assert_eq!(qc.k(), -4.0);

        assert_eq!(q.opposite(), Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(-q, q.opposite());
    }

    #[test]
    fn test_multiplication_units() {
        let one = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        // i*j = k, j*k = i, k*i = j
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);

        // i*i = -1
        assert_eq!(i * i, one.opposite());
        assert_eq!(one.times(&i), i);
    }

    #[test]
    fn test_minus_matches_plus_opposite() {
        let p = Quaternion::new(12.0, -34.0, 1.0, 5.0);
        let q = Quaternion::new(1.0, -2.0, -1.0, 2.0);
        assert_eq!(p.minus(&q), p.plus(&q.opposite()));
        assert_eq!(p - q, Quaternion::new(11.0, -32.0, 2.0, 3.0));
    }

    #[test]
    fn test_scale() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 4.0);
        assert_eq!(q.scale(2.0), Quaternion::new(2.0, -4.0, 1.0, 8.0));
        assert_eq!(q * 0.0, Quaternion::zero());
    }

    #[test]
    fn test_norm() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_abs_diff_eq!(q.norm(), 5.0, epsilon = 1e-12);
        assert_eq!(Quaternion::zero().norm(), 0.0);
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let qi = q.inverse().unwrap();
        assert_eq!(q * qi, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(qi * q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_inverse_uses_tolerance_zero() {
        // Tiny but non-zero components count as zero
        let q = Quaternion::new(0.00001, 0.0, -0.00002, 0.0);
        let err = q.inverse().unwrap_err();
        assert!(matches!(err, QuaternionError::Division { .. }));
    }

    #[test]
    fn test_divide_reports_divisor() {
        let p = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        let err = p.divide_by_right(&Quaternion::zero()).unwrap_err();
        assert_eq!(
            err,
            QuaternionError::division(Quaternion::zero().to_string())
        );

        let err = p.divide_by_left(&Quaternion::zero()).unwrap_err();
        assert!(err.to_string().contains("0.0+0.0i+0.0j+0.0k"));
    }

    #[test]
    fn test_divide_left_and_right() {
        let p = Quaternion::new(12.0, -34.0, 1.0, 5.0);
        let q = Quaternion::new(1.0, -2.0, -1.0, 2.0);

        let right = p.divide_by_right(&q).unwrap();
        assert_eq!(right * q, p);

        let left = p.divide_by_left(&q).unwrap();
        assert_eq!(q * left, p);
    }

    #[test]
    fn test_dot_mult_is_symmetric_and_real() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q = Quaternion::new(-1.0, 0.5, 2.0, 1.0);
        let pq = p.dot_mult(&q);
        assert_eq!(pq, q.dot_mult(&p));
        // -1 + 1 + 6 + 4
        assert_eq!(pq, Quaternion::new(10.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_equality_tolerance() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, Quaternion::new(1.00009, 2.0, 3.0, 3.99991));
        assert_ne!(q, Quaternion::new(1.0002, 2.0, 3.0, 4.0));
        assert!(components_match(0.5, 0.50005));
        assert!(!components_match(0.5, 0.5002));
    }

    #[test]
    fn test_equality_is_not_transitive() {
        let x = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let y = Quaternion::new(1.00009, 0.0, 0.0, 0.0);
        let z = Quaternion::new(1.00018, 0.0, 0.0, 0.0);
        assert_eq!(x, y);
        assert_eq!(y, z);
        assert_ne!(x, z);
    }

    #[test]
    fn test_nan_propagates() {
        let q = Quaternion::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(q.plus(&Quaternion::zero()).real().is_nan());
        assert_ne!(q, q);
    }

    #[test]
    fn test_hash_follows_formatting() {
        let mut set = HashSet::new();
        set.insert(Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert!(set.contains(&Quaternion::new(1.0, 2.0, 3.0, 4.0)));
        assert!(!set.insert(Quaternion::new(1.0, 2.0, 3.0, 4.0)));

        let q = Quaternion::new(12.0, -34.0, 1.0, 5.0);
        assert_eq!(q.fingerprint(), q.clone().fingerprint());
        assert_eq!(q.fingerprint().len(), 64);
        assert_ne!(q.fingerprint(), q.conjugate().fingerprint());
    }

    #[test]
    fn test_serde_components() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 4.0);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json, serde_json::json!({"a": 1.0, "b": -2.0, "c": 0.5, "d": 4.0}));

        let back: Quaternion = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }
}
