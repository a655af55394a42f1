//! Headless core of a spring-back directional drag control.
//!
//! A circular button is dragged inside a bounded radius around its rest
//! position. Each move is clamped to that circle, converted into a power
//! (0..=100 of the radius) and an angle, and classified into one of eight
//! directions. Direction changes are published as edge-triggered boolean
//! signals; release snaps the button back and may fire a tap.
//!
//! Layout
//! - `geom`: clamp, power, angle and the 8-sector direction table.
//! - `session`: per-gesture pointer tracking (anchor, press offset, tap check).
//! - `signal`: last-value-cached observable flags and subscription scopes.
//! - `engine`: the `Idle → Pressed → Dragging → Idle` state machine and the `Host` seam.
//! - `replay`, `gen`: scripted gestures and seeded synthetic gestures.

pub mod api;
pub mod cfg;
pub mod engine;
pub mod error;
pub mod gen;
pub mod geom;
pub mod replay;
pub mod session;
pub mod signal;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DragCfg;
pub use engine::{
    DragGeometryEngine, Frame, Host, Outcome, Phase, PointerAction, PointerEvent, RecordingHost,
};
pub use error::{ConfigError, EngineError};
pub use geom::{Classification, Direction};
pub use nalgebra::Vector2 as Vec2;
pub use signal::{Flag, FlagSnapshot, Signal, Subscription};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::DragCfg;
    pub use crate::engine::{
        DragGeometryEngine, Frame, Host, Outcome, Phase, PointerAction, PointerEvent,
        RecordingHost,
    };
    pub use crate::geom::{angle, clamp, classify, power, Classification, Direction};
    pub use crate::replay::{replay, GestureScript, Trace};
    pub use crate::signal::{Flag, FlagSnapshot};
    pub use nalgebra::Vector2 as Vec2;
}
