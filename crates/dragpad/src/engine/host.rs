//! The seam between the engine and whatever renders the button.

use nalgebra::Vector2;

use super::types::Frame;
use crate::cfg::REST_SCALE;

/// Rendering side of the control.
///
/// The engine calls these synchronously from `handle`; implementations must
/// not call back into the engine.
pub trait Host {
    /// Rest position and height, queried once per press.
    fn frame(&self) -> Frame;
    /// Place the button at `position` immediately.
    fn move_to(&mut self, position: Vector2<f64>);
    /// Scale the button visual.
    fn set_scale(&mut self, scale: f64);
    /// The gesture completed as a tap.
    fn tap(&mut self);
}

/// In-memory host that remembers what the engine asked of it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingHost {
    pub frame: Frame,
    pub position: Vector2<f64>,
    pub scale: f64,
    pub taps: usize,
    pub moves: usize,
}

impl RecordingHost {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            position: frame.position(),
            scale: REST_SCALE,
            taps: 0,
            moves: 0,
        }
    }
}

impl Host for RecordingHost {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn move_to(&mut self, position: Vector2<f64>) {
        self.position = position;
        self.moves += 1;
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn tap(&mut self) {
        self.taps += 1;
    }
}
