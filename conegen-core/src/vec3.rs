//! 3D vector type shared across the conegen crates.
//!
//! Points and directions use the same type, so rotating a "point" rotates
//! its offset from the world origin. All operations are pure: they return a
//! new value and never mutate `self`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3D vector (or point) with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean length (avoids the sqrt, cheaper for comparisons).
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length input returns the zero vector; callers must treat that
    /// as a degenerate direction rather than an error.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        *self / len
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product: `self` × `other`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Rotate about the line through the world origin along `axis` by
    /// `angle` radians, using Rodrigues' formula:
    ///
    /// `v cosθ + (k̂ × v) sinθ + k̂ (k̂ · v)(1 − cosθ)` with `k̂ = axis.normalize()`.
    ///
    /// A zero-length axis returns `self` unchanged.
    pub fn rotate(&self, axis: Self, angle: f64) -> Self {
        if axis.length_squared() == 0.0 {
            return *self;
        }
        let k = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        *self * cos + k.cross(*self) * sin + k * (k.dot(*self) * (1.0 - cos))
    }

    /// True when all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Division follows IEEE-754: dividing by zero produces infinite or NaN
/// components, not a panic.
impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
