//! Virtual analog stick controller for touch screens
//!
//! Translates pointer (touch) streams into normalized 2-D direction samples
//! plus a derived angle for game logic to consume. Two behavioral variants:
//! a *fixed* stick that sits at its region center, and a *movable* stick
//! that relocates under the first touch, fading in while tracked and out on
//! release.
//!
//! The crate is rendering-agnostic: the controller emits analog data
//! through the [`AnalogObserver`] sink and visual intents (offsets, tweens,
//! fades) through the [`StickRenderer`] port. The host event loop delivers
//! pointer events serially in controller-local coordinates; all handlers
//! run synchronously.
//!
//! ```
//! use touchstick::{AnalogController, AnalogUpdate, StickConfig, Vec2};
//!
//! let config = StickConfig::fixed(50.0);
//! let mut stick = AnalogController::new(config, |update: AnalogUpdate| {
//!     // feed update.velocity / update.angle into the game
//!     let _ = (update.velocity, update.angle);
//! })
//! .unwrap();
//!
//! stick.on_pointer_begin(1, Vec2::new(0.0, 0.0));
//! stick.on_pointer_move(&[(1, Vec2::new(60.0, 0.0))]);
//! stick.on_pointer_end(&[1]);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod geom;
pub mod render;
pub mod stick;

pub use config::{StickConfig, StickMode};
pub use controller::{
    AnalogController, AnalogObserver, AnalogUpdate, PointerId, CANCEL_FADE_ALPHA,
};
pub use error::ConfigError;
pub use geom::Vec2;
pub use render::{ConsoleRenderer, NullRenderer, StickRenderer};
pub use stick::{StickCore, StickSample};
