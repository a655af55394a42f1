//! Pointer events, host frame, and per-event outcomes.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

/// Pointer event in absolute screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[inline]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Down,
            x,
            y,
        }
    }

    #[inline]
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Move,
            x,
            y,
        }
    }

    #[inline]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Up,
            x,
            y,
        }
    }

    #[inline]
    pub fn point(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Rest position and height of the control, as reported by the host on press.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

impl Frame {
    #[inline]
    pub fn new(x: f64, y: f64, height: f64) -> Self {
        Self { x, y, height }
    }

    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Interaction phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pressed; the gesture could still be a tap.
    Pressed,
    /// Tap ruled out; directions may be reported.
    Dragging,
}

/// What the engine did with one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Out-of-sequence event, dropped.
    Ignored,
    Pressed,
    Moved,
    Released { tap: bool },
}

impl Outcome {
    /// Whether the host should treat the event as handled.
    #[inline]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Outcome::Ignored)
    }
}
