//! Shared 2-D geometry for the stick controller
//!
//! Provides the `Vec2` value type used for touch points and offsets, and the
//! radial clamp that bounds the stick offset to the base disk.

use serde::{Deserialize, Serialize};

/// 2-D vector in controller-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Clamp a point to the disk of the given radius around the origin.
///
/// Points inside the disk (boundary inclusive) are preserved exactly; points
/// outside are scaled radially back to the rim, keeping their direction. The
/// origin itself is returned unchanged, so a zero-length input never divides
/// by zero.
///
/// # Arguments
/// * `p` - Point relative to the disk center
/// * `radius` - Disk radius
///
/// # Returns
/// A point with `length() <= radius`
pub fn clamp_to_disk(p: Vec2, radius: f32) -> Vec2 {
    let distance = p.length();
    if distance > radius {
        Vec2::new(p.x / distance * radius, p.y / distance * radius)
    } else {
        p
    }
}
