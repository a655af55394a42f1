//! Boundary clamp and direction classifier.
//!
//! Purpose
//! - Keep a dragged button inside a circle around its anchor.
//! - Turn the clamped displacement into a power (percent of radius) and a
//!   whole-degree angle, then into one of eight 45° sectors.
//!
//! Conventions
//! - Screen coordinates: y grows downward.
//! - Angle 0° is directly above the anchor, increasing clockwise:
//!   90° right, ±180° below, -90° left. Range is [-180, 180].
//! - Zero displacement and non-positive radius are defined cases, never errors.
//!
//! Code cross-refs: `engine::DragGeometryEngine`, `session::InteractionSession`.

mod classify;
mod types;

pub use classify::{angle, clamp, classify, power, Classification};
pub use types::Direction;
