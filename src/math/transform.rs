//! Planar geometry helpers

use serde::{Deserialize, Serialize};

/// A point in physical canvas units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downwards, as in SVG)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate this point about `pivot` by `degrees` (clockwise on screen)
    #[must_use]
    pub fn rotated_about(self, pivot: Self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: dx.mul_add(cos, -(dy * sin)) + pivot.x,
            y: dx.mul_add(sin, dy * cos) + pivot.y,
        }
    }

    /// Translate by a vector
    #[must_use]
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Point reached by walking `length` from `origin` at `degrees`
pub fn polar_offset(origin: Point, degrees: f64, length: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    origin.offset(cos * length, sin * length)
}

/// Whether a rotation angle is zero and can be omitted
pub const fn is_zero_angle(degrees: f64) -> bool {
    degrees.abs() < f64::EPSILON
}
