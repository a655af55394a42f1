//! Per-gesture pointer tracking.
//!
//! A session lives from press to release. It pins the anchor (rest position),
//! the offset between the raw pointer and the button at press time, and the
//! drag radius for this gesture. `last_angle` is carried here rather than on
//! the engine so that one gesture's bottom-crossing side never leaks into the
//! next.

use nalgebra::Vector2;

/// State of one press-to-release gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionSession {
    /// Rest position of the button captured at press time.
    pub anchor: Vector2<f64>,
    /// `anchor - down_point`; maps raw pointer positions to button positions.
    pub press_offset: Vector2<f64>,
    /// Raw pointer position at press time.
    pub down_point: Vector2<f64>,
    /// Drag boundary for this gesture.
    pub radius: f64,
    /// Last committed angle, consulted when the pointer is exactly below the anchor.
    pub last_angle: i32,
}

impl InteractionSession {
    /// Open a session for a press at `press_point` on a button resting at `anchor`.
    pub fn begin(
        press_point: Vector2<f64>,
        anchor: Vector2<f64>,
        height: f64,
        radius_ratio: f64,
    ) -> Self {
        Self {
            anchor,
            press_offset: anchor - press_point,
            down_point: press_point,
            radius: height * radius_ratio,
            last_angle: 0,
        }
    }

    /// Where the button would sit if it followed `current` freely (unclamped).
    #[inline]
    pub fn candidate_position(&self, current: Vector2<f64>) -> Vector2<f64> {
        current + self.press_offset
    }

    /// True iff `point` is strictly within `tolerance` of the press point on both axes.
    #[inline]
    pub fn is_tap(&self, point: Vector2<f64>, tolerance: f64) -> bool {
        let d = point - self.down_point;
        d.x.abs() < tolerance && d.y.abs() < tolerance
    }
}
