//! Error types for the dragpad library.
//!
//! Geometry never fails: zero displacement and zero radius are defined cases.
//! Errors only arise from invalid tunables and from misuse of the
//! subscription scope.

use thiserror::Error;

use crate::signal::Flag;

/// A tunable in [`crate::DragCfg`] or [`crate::gen::GestureCfg`] is outside its valid range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Tolerance, ratio or scale is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// Tolerance, ratio or scale is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A probability is NaN or outside [0, 1].
    #[error("{field} must be a probability in [0, 1], got {value}")]
    NotAProbability { field: &'static str, value: f64 },

    /// Power threshold outside 0..=100.
    #[error("power threshold must be within 0..=100, got {0}")]
    ThresholdOutOfRange(u8),
}

/// Errors raised by [`crate::DragGeometryEngine`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// `start()` called while a subscription scope is already open.
    #[error("engine is already active")]
    AlreadyActive,

    /// Subscribing requires an open scope.
    #[error("cannot subscribe to {0:?}: engine is not active")]
    NotActive(Flag),

    /// The engine was built from an invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A convenient alias for Result with [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;
