//! Cartesian positions in 3D space.
//!
//! Nodes live at fixed points; the only geometric question the topology
//! ever asks is the Euclidean distance between two of them.

use std::ops::Sub;

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance. Cheaper when only ordering matters.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let d = *self - *other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Euclidean distance between two positions.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Whether `other` lies within `range` (inclusive).
    #[inline]
    pub fn within(&self, other: &Self, range: f64) -> bool {
        self.distance(other) <= range
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
