//! Error types for stick configuration
//!
//! Runtime pointer events are total and cannot fail; construction is the
//! only fallible boundary.

use thiserror::Error;

/// Validation and parsing errors for [`StickConfig`](crate::config::StickConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base_radius must be positive, got {0}")]
    NonPositiveBaseRadius(f32),

    #[error("tracking_half_extent ({x}, {y}) must cover the base disk (radius {radius}) on both axes")]
    TrackingExtentTooSmall { x: f32, y: f32, radius: f32 },

    #[error("{field} must not be negative, got {value}")]
    NegativeDuration { field: &'static str, value: f32 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("failed to parse YAML config")]
    Yaml(#[from] serde_yaml::Error),
}
