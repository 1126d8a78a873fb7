//! Renderer port - visual intents emitted by the controller
//!
//! The controller never references graphics primitives. It issues intents
//! through [`StickRenderer`] and a scene-graph collaborator realizes them
//! (sprite positions, tweens, alpha fades).

use tracing::debug;

/// Rendering hooks consumed by [`AnalogController`](crate::AnalogController).
///
/// All methods default to no-ops so implementors override only what they
/// draw. Durations are in seconds. Methods are invoked synchronously from
/// the pointer event handlers; implementations must not re-enter the
/// controller.
pub trait StickRenderer {
    /// Position the stick node at `(dx, dy)` relative to the base center.
    fn set_stick_offset(&mut self, _dx: f32, _dy: f32) {}

    /// Tween the stick node back to the base center.
    fn animate_stick_to_origin(&mut self, _duration: f32) {}

    /// Relocate the base under a new touch (movable mode).
    fn set_base_center(&mut self, _x: f32, _y: f32) {}

    /// Fade the base to the given alpha.
    fn fade_base_to(&mut self, _alpha: f32, _duration: f32) {}
}

/// Renderer that ignores every intent.
///
/// The default collaborator when only the observer stream matters (headless
/// game logic, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl StickRenderer for NullRenderer {}

/// Renderer that logs every intent.
///
/// Useful for:
/// - Wiring up gesture handling before any sprites exist
/// - Debugging controller behavior without a scene graph
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleRenderer;

impl StickRenderer for ConsoleRenderer {
    fn set_stick_offset(&mut self, dx: f32, dy: f32) {
        debug!("stick offset ({:.2}, {:.2})", dx, dy);
    }

    fn animate_stick_to_origin(&mut self, duration: f32) {
        debug!("stick recenter over {:.2}s", duration);
    }

    fn set_base_center(&mut self, x: f32, y: f32) {
        debug!("base center ({:.2}, {:.2})", x, y);
    }

    fn fade_base_to(&mut self, alpha: f32, duration: f32) {
        debug!("base fade to {:.2} over {:.2}s", alpha, duration);
    }
}
