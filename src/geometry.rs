//! Vector math shared by the mapping and resolution stages.
//!
//! All points live in normalized detector space (0..1 per axis, z optional).
//! Functions here are pure and never produce NaN for degenerate input.

use crate::constants::EPSILON;
use serde::{Deserialize, Serialize};

/// A point or vector in normalized detector space.
///
/// `z` defaults to 0 for 2D detectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point3 {
    /// Create a 2D point (z = 0)
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Create a full 3D point
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector magnitude
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new_3d(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new_3d(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, s: f64) -> Point3 {
        Point3::new_3d(self.x * s, self.y * s, self.z * s)
    }
}

/// Euclidean distance between two points
#[must_use]
pub fn distance(a: Point3, b: Point3) -> f64 {
    (a - b).magnitude()
}

/// Normalize a vector to unit length.
///
/// The zero vector normalizes to the zero vector, never NaN or infinity.
#[must_use]
pub fn normalize(v: Point3) -> Point3 {
    let mag = v.magnitude();
    if mag < EPSILON {
        return Point3::new_3d(0.0, 0.0, 0.0);
    }
    Point3::new_3d(v.x / mag, v.y / mag, v.z / mag)
}

/// Cross product of two vectors
#[must_use]
pub fn cross(a: Point3, b: Point3) -> Point3 {
    Point3::new_3d(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Dot product of two vectors
#[must_use]
pub fn dot(a: Point3, b: Point3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Angle of the `from -> to` direction in the image plane, in degrees.
///
/// Computed with `atan2`, so the result is in (-180, 180]. The z component
/// is ignored; this is a 2D screen-space angle.
#[must_use]
pub fn angle_degrees(from: Point3, to: Point3) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Midpoint of two points
#[must_use]
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    blend(a, b, 0.5)
}

/// Weighted blend of two points: `a * (1 - t) + b * t`
#[must_use]
pub fn blend(a: Point3, b: Point3, t: f64) -> Point3 {
    Point3::new_3d(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}
