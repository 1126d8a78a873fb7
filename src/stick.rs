//! Stick kinematics core
//!
//! Maintains a 2-D position constrained to the base disk and produces
//! normalized samples. This is the geometric leaf of the controller: no
//! pointer bookkeeping, no mode behavior, no failure paths.

use crate::geom::{clamp_to_disk, Vec2};

/// Normalized stick deflection, both components in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickSample {
    pub nx: f32,
    pub ny: f32,
}

impl StickSample {
    /// The centered (zero-deflection) sample.
    pub const ZERO: StickSample = StickSample { nx: 0.0, ny: 0.0 };
}

/// Geometric state of a single stick: the clamped offset of the stick node
/// relative to the base center.
#[derive(Debug, Clone)]
pub struct StickCore {
    base_radius: f32,
    offset: Vec2,
}

impl StickCore {
    /// Create a centered core. The radius is validated upstream by
    /// [`StickConfig::validate`](crate::config::StickConfig::validate).
    pub fn new(base_radius: f32) -> Self {
        Self {
            base_radius,
            offset: Vec2::ZERO,
        }
    }

    /// Current clamped offset relative to the base center.
    ///
    /// This is what a renderer positions the stick sprite at.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Apply a touch position local to the base (origin at base center).
    ///
    /// The point is clamped to the base disk, stored as the stick offset,
    /// and returned normalized by the base radius.
    ///
    /// # Arguments
    /// * `local` - Touch position relative to the base center
    ///
    /// # Returns
    /// The normalized sample, `hypot(nx, ny) <= 1` up to float rounding
    pub fn set_from_touch(&mut self, local: Vec2) -> StickSample {
        self.offset = clamp_to_disk(local, self.base_radius);
        StickSample {
            nx: self.offset.x / self.base_radius,
            ny: self.offset.y / self.base_radius,
        }
    }

    /// Snap the offset back to the origin and return the zero sample.
    ///
    /// The visual recentering tween is the renderer's concern; the logical
    /// state resets immediately.
    pub fn reset(&mut self) -> StickSample {
        self.offset = Vec2::ZERO;
        StickSample::ZERO
    }
}
