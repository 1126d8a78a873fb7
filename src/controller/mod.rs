//! Analog stick controller - pointer streams to normalized updates
//!
//! Translates a stream of multi-touch pointer events into stick updates
//! with single-stick, multi-pointer tolerant semantics, and manages the
//! movable-base behavior (relocation, fade in/out).
//!
//! The controller is driven by a host UI event loop delivering events
//! serially; handlers never suspend and invoke the observer and renderer
//! synchronously.

mod pointers;


use tracing::{debug, trace};

use crate::config::{StickConfig, StickMode};
use crate::error::ConfigError;
use crate::geom::Vec2;
use crate::render::{NullRenderer, StickRenderer};
use crate::stick::{StickCore, StickSample};

use pointers::PointerSet;

/// Host-assigned identifier of a touch contact.
pub type PointerId = u64;

/// Base fade target used on pointer cancel instead of the clean fade to
/// zero a release performs.
///
/// The faint ghost marks that the gesture was cancelled by the host rather
/// than lifted. Callers should not depend on the exact value.
pub const CANCEL_FADE_ALPHA: f32 = 0.1;

/// One analog update: normalized velocity plus derived angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogUpdate {
    /// Normalized stick deflection, components in [-1, 1].
    pub velocity: Vec2,
    /// `-atan2(vx, vy)` radians (x first, y second): zero with the stick
    /// pushed straight up, increasing clockwise. Callers needing the
    /// conventional counter-clockwise-from-east angle must convert.
    pub angle: f32,
}

impl AnalogUpdate {
    fn from_sample(sample: StickSample) -> Self {
        Self {
            velocity: Vec2::new(sample.nx, sample.ny),
            angle: -sample.nx.atan2(sample.ny),
        }
    }
}

/// Observer sink for analog updates.
///
/// Blanket-implemented for `FnMut(AnalogUpdate)` closures, so a plain
/// closure is a valid sink. Invoked synchronously from the event handlers;
/// implementations must not re-enter the controller.
pub trait AnalogObserver {
    fn on_analog_update(&mut self, update: AnalogUpdate);
}

impl<F: FnMut(AnalogUpdate)> AnalogObserver for F {
    fn on_analog_update(&mut self, update: AnalogUpdate) {
        self(update)
    }
}

/// Virtual analog stick controller.
///
/// Owns one [`StickCore`] and the pointer bookkeeping around it. Pointer
/// coordinates are local to the tracking region: origin at its center, axes
/// aligned with it. The host is responsible for hit-testing events against
/// its scene and transforming coordinates before delivery.
pub struct AnalogController {
    config: StickConfig,
    half_extent: Vec2,
    core: StickCore,
    pointers: PointerSet,
    base_center: Vec2,
    base_visible: bool,
    is_tracking: bool,
    observer: Box<dyn AnalogObserver>,
    renderer: Box<dyn StickRenderer>,
}

impl AnalogController {
    /// Construct a controller with no renderer attached.
    ///
    /// # Returns
    /// `Err(ConfigError)` when the config fails [`StickConfig::validate`]
    pub fn new(
        config: StickConfig,
        observer: impl AnalogObserver + 'static,
    ) -> Result<Self, ConfigError> {
        Self::with_renderer(config, observer, NullRenderer)
    }

    /// Construct a controller with a renderer collaborator realizing the
    /// visual intents.
    pub fn with_renderer(
        config: StickConfig,
        observer: impl AnalogObserver + 'static,
        renderer: impl StickRenderer + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut renderer: Box<dyn StickRenderer> = Box::new(renderer);
        if config.mode == StickMode::Movable {
            // Movable base starts hidden until a gesture tracks
            renderer.fade_base_to(0.0, 0.0);
        }

        Ok(Self {
            half_extent: config.resolved_half_extent(),
            core: StickCore::new(config.base_radius),
            pointers: PointerSet::default(),
            base_center: Vec2::ZERO,
            base_visible: config.mode == StickMode::Fixed,
            is_tracking: false,
            observer: Box::new(observer),
            renderer,
            config,
        })
    }

    /// A pointer went down at `point`.
    ///
    /// Points outside the tracking region are ignored entirely: the id is
    /// not registered and nothing is emitted. Inside, the id joins the
    /// active set (idempotently), the movable base relocates under the
    /// touch, and the touch is applied to the stick. In movable mode the
    /// resulting update is always zero, since the base just moved under the
    /// finger.
    pub fn on_pointer_begin(&mut self, id: PointerId, point: Vec2) {
        if !self.in_tracking_region(point) {
            trace!(id, "begin outside tracking region, ignored");
            return;
        }
        if !self.pointers.insert(id) {
            return;
        }

        if self.config.mode == StickMode::Movable {
            self.base_center = point;
            self.renderer.set_base_center(point.x, point.y);
        }

        debug!(id, "pointer begin accepted");
        self.apply_touch(point);
    }

    /// A batch of pointers moved.
    ///
    /// Entries whose id is not active are skipped. Entries are applied in
    /// delivery order, so with several active pointers the last one in the
    /// batch wins. If at least one entry applied in movable mode, the base
    /// is asked to fade in and the controller starts tracking.
    pub fn on_pointer_move(&mut self, batch: &[(PointerId, Vec2)]) {
        let mut applied = false;
        for &(id, point) in batch {
            if !self.pointers.contains(id) {
                trace!(id, "move for inactive pointer, ignored");
                continue;
            }
            self.apply_touch(point);
            applied = true;
        }

        if applied && self.config.mode == StickMode::Movable {
            if !self.is_tracking {
                debug!("movable base tracking, fading in");
            }
            self.renderer
                .fade_base_to(1.0, self.config.movable_fade_in);
            self.is_tracking = true;
            self.base_visible = true;
        }
    }

    /// Pointers lifted cleanly.
    ///
    /// Ids not in the active set are ignored. When the last active pointer
    /// lifts, the stick resets to center, a zero update is emitted, and the
    /// movable base fades out. While other pointers remain down the offset
    /// is kept; their next move refreshes it.
    pub fn on_pointer_end(&mut self, ids: &[PointerId]) {
        self.release(ids, 0.0);
    }

    /// Pointers cancelled by the host (palm rejection, gesture takeover).
    ///
    /// Identical to [`on_pointer_end`](Self::on_pointer_end) except the
    /// movable base fades to [`CANCEL_FADE_ALPHA`] instead of zero.
    pub fn on_pointer_cancel(&mut self, ids: &[PointerId]) {
        self.release(ids, CANCEL_FADE_ALPHA);
    }

    /// Move the base center (fixed mode integrators that place the base off
    /// the region center). Does not touch the stick offset.
    pub fn set_base_center(&mut self, center: Vec2) {
        self.base_center = center;
        self.renderer.set_base_center(center.x, center.y);
    }

    /// Current clamped stick offset relative to the base center.
    pub fn stick_offset(&self) -> Vec2 {
        self.core.offset()
    }

    /// Current base center in controller-local coordinates.
    pub fn base_center(&self) -> Vec2 {
        self.base_center
    }

    /// Whether the base is currently requested fully visible.
    pub fn base_visible(&self) -> bool {
        self.base_visible
    }

    /// Whether a movable-mode gesture is currently tracking.
    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    /// Whether `id` currently drives the stick.
    pub fn is_pointer_active(&self, id: PointerId) -> bool {
        self.pointers.contains(id)
    }

    /// Number of active pointers.
    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &StickConfig {
        &self.config
    }

    fn release(&mut self, ids: &[PointerId], fade_target: f32) {
        let mut removed = false;
        for &id in ids {
            removed |= self.pointers.remove(id);
        }
        if !removed {
            return;
        }

        if !self.pointers.is_empty() {
            // A second finger is still down: keep the offset, its next move
            // refreshes the stick
            return;
        }

        debug!("last pointer released, recentering");
        let sample = self.core.reset();
        self.renderer
            .animate_stick_to_origin(self.config.recenter_duration);
        self.emit(sample);

        if self.config.mode == StickMode::Movable && self.is_tracking {
            self.renderer
                .fade_base_to(fade_target, self.config.movable_fade_out);
            self.is_tracking = false;
            self.base_visible = false;
        }
    }

    fn apply_touch(&mut self, point: Vec2) {
        let sample = self.core.set_from_touch(point - self.base_center);
        let offset = self.core.offset();
        self.renderer.set_stick_offset(offset.x, offset.y);
        self.emit(sample);
    }

    fn emit(&mut self, sample: StickSample) {
        self.observer
            .on_analog_update(AnalogUpdate::from_sample(sample));
    }

    /// Boundary-inclusive containment in the tracking rectangle.
    fn in_tracking_region(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extent.x && point.y.abs() <= self.half_extent.y
    }
}
