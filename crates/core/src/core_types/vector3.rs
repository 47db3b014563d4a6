//! 3D vector value type for positions, velocities, accelerations, and colors.
//!
//! Every arithmetic operation returns a new `Vector3`; only the explicit
//! component setters mutate an instance. Components are never validated, so
//! NaN and infinities flow through arithmetic untouched.
//!
//! The two fallible operations, scalar division and normalization, compare
//! against zero with exact equality. A divisor of `1e-300` is accepted and may
//! overflow to infinity; only `0.0` (or `-0.0`) is rejected.
//!
//! # Usage
//! ```
//! use particle_sim_core::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!((a + b).dot(a), 1.0);
//! assert!(Vector3::zeros().normalize().is_err());
//! ```

use crate::error::VectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::debug;

/// Double-precision 3D vector with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// Create a vector from explicit components
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector, same as `Vector3::default()`
    #[inline]
    #[must_use]
    pub const fn zeros() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    // ========================================================================
    // COMPONENT ACCESS
    // ========================================================================

    /// X component
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Overwrite the x component
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Overwrite the y component
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Overwrite the z component
    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    // ========================================================================
    // PRODUCTS AND LENGTH
    // ========================================================================

    /// Dot product
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// Parallel inputs (including `a.cross(a)`) and zero inputs give the zero
    /// vector.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length, never negative
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    // ========================================================================
    // FALLIBLE OPERATIONS
    // ========================================================================

    /// Divide every component by `scalar`.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] when `scalar == 0.0`. Any other
    /// divisor is accepted, however small.
    #[inline]
    pub fn div_scalar(self, scalar: f64) -> Result<Vector3, VectorError> {
        if scalar == 0.0 {
            debug!(vector = %self, "rejected scalar division by zero");
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar))
    }

    /// Scale to unit length, keeping direction.
    ///
    /// # Errors
    /// Returns [`VectorError::ZeroMagnitude`] only when the magnitude is exactly
    /// `0.0`. A vanishingly small but nonzero vector is divided through and
    /// may come back with a very large or non-finite magnitude.
    #[inline]
    pub fn normalize(self) -> Result<Vector3, VectorError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            debug!("rejected normalization of zero vector");
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(Vector3::new(self.x / mag, self.y / mag, self.z / mag))
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vector3 = Vector3 (scalar on the left)
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

// ============================================================================
// NALGEBRA INTEROP
// ============================================================================

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}
