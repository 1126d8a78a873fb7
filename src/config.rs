//! Configuration for the analog stick controller
//!
//! Handles the typed construction record, serde defaults, and validation.
//! The YAML adapter stands in for authoring-tool scene files: integrators
//! parse whatever format they use into a [`StickConfig`] and hand it to the
//! controller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::geom::Vec2;

/// Behavioral variant of the stick.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StickMode {
    /// Base always visible at a fixed location; touches anywhere inside the
    /// tracking region deflect the stick from the region center.
    Fixed,
    /// Base hidden until a gesture begins; relocates under the touch, fades
    /// in while tracking and fades out on release.
    Movable,
}

/// Construction record for [`AnalogController`](crate::AnalogController).
///
/// Immutable once the controller is built. All distances are in the
/// integrator's controller-local units, all durations in seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StickConfig {
    /// Radius of the base disk; the stick offset is clamped to this.
    pub base_radius: f32,

    /// Half extent of the axis-aligned tracking rectangle in which
    /// pointer-downs are accepted. Defaults to the base disk's bounding
    /// square when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_half_extent: Option<Vec2>,

    #[serde(default = "default_mode")]
    pub mode: StickMode,

    /// Seconds the renderer takes to tween the stick back to the origin
    /// after the last pointer lifts.
    #[serde(default = "default_recenter_duration")]
    pub recenter_duration: f32,

    /// Seconds to fade the movable base in once a gesture tracks.
    #[serde(default = "default_fade_in")]
    pub movable_fade_in: f32,

    /// Seconds to fade the movable base out on release.
    #[serde(default = "default_fade_out")]
    pub movable_fade_out: f32,
}

fn default_mode() -> StickMode {
    StickMode::Fixed
}

fn default_recenter_duration() -> f32 {
    0.2
}

fn default_fade_in() -> f32 {
    0.1
}

fn default_fade_out() -> f32 {
    0.2
}

impl StickConfig {
    /// Fixed-mode config with default timings and a tracking region equal to
    /// the base disk's bounding square.
    pub fn fixed(base_radius: f32) -> Self {
        Self {
            base_radius,
            tracking_half_extent: None,
            mode: StickMode::Fixed,
            recenter_duration: default_recenter_duration(),
            movable_fade_in: default_fade_in(),
            movable_fade_out: default_fade_out(),
        }
    }

    /// Movable-mode config with the given tracking half extent and default
    /// timings.
    pub fn movable(base_radius: f32, tracking_half_extent: Vec2) -> Self {
        Self {
            base_radius,
            tracking_half_extent: Some(tracking_half_extent),
            mode: StickMode::Movable,
            recenter_duration: default_recenter_duration(),
            movable_fade_in: default_fade_in(),
            movable_fade_out: default_fade_out(),
        }
    }

    /// Tracking half extent with the default applied.
    pub fn resolved_half_extent(&self) -> Vec2 {
        self.tracking_half_extent
            .unwrap_or_else(|| Vec2::new(self.base_radius, self.base_radius))
    }

    /// Validate the record for geometric and temporal consistency.
    ///
    /// # Returns
    /// `Ok(())` when the base radius is positive, the tracking region covers
    /// the base disk, and no duration is negative. Non-finite values are
    /// rejected before the range checks (NaN slips through `<=` comparisons).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_checks: [(&'static str, f32); 4] = [
            ("base_radius", self.base_radius),
            ("recenter_duration", self.recenter_duration),
            ("movable_fade_in", self.movable_fade_in),
            ("movable_fade_out", self.movable_fade_out),
        ];
        for (field, value) in finite_checks {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if let Some(extent) = self.tracking_half_extent {
            if !extent.x.is_finite() || !extent.y.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: "tracking_half_extent",
                });
            }
        }

        if self.base_radius <= 0.0 {
            return Err(ConfigError::NonPositiveBaseRadius(self.base_radius));
        }

        let extent = self.resolved_half_extent();
        if extent.x < self.base_radius || extent.y < self.base_radius {
            return Err(ConfigError::TrackingExtentTooSmall {
                x: extent.x,
                y: extent.y,
                radius: self.base_radius,
            });
        }

        let durations: [(&'static str, f32); 3] = [
            ("recenter_duration", self.recenter_duration),
            ("movable_fade_in", self.movable_fade_in),
            ("movable_fade_out", self.movable_fade_out),
        ];
        for (field, value) in durations {
            if value < 0.0 {
                return Err(ConfigError::NegativeDuration { field, value });
            }
        }

        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: StickConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid stick config: {}", path.display()))?;
        Ok(config)
    }
}
