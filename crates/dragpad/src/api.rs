//! Curated surface for hosts and tools.
//!
//! Prefer these re-exports in callers; module paths behind them may move.

pub use crate::cfg::DragCfg;
pub use crate::engine::{
    DragGeometryEngine, Frame, Host, Outcome, Phase, PointerAction, PointerEvent, RecordingHost,
};
pub use crate::gen::{draw_gesture, draw_script, GestureCfg, ReplayToken};
pub use crate::geom::{angle, clamp, classify, power, Classification, Direction};
pub use crate::replay::{replay, GestureScript, Notification, Step, Trace};
pub use crate::session::InteractionSession;
pub use crate::signal::{Flag, FlagSnapshot, Signal, Subscription};

use nalgebra::Vector2;

/// Classify a button position against a frame at rest, as a fresh gesture would.
///
/// The radius comes from `frame.height × cfg.radius_ratio`; the previous angle is 0.
pub fn classify_in_frame(frame: Frame, cfg: &DragCfg, position: Vector2<f64>) -> Classification {
    classify(position, frame.position(), frame.height * cfg.radius_ratio, 0)
}

/// First and last angle of each direction's sector over [-180, 180], in sector order.
///
/// Bottom wraps across ±180 and is reported as `(158, -158)`.
pub fn sector_table() -> Vec<(Direction, i32, i32)> {
    Direction::ALL
        .iter()
        .map(|&dir| {
            let members: Vec<i32> = (-180..=180)
                .filter(|&deg| Direction::from_angle(deg) == dir)
                .collect();
            let (lo, hi) = match (members.first(), members.last()) {
                (Some(&lo), Some(&hi)) => (lo, hi),
                _ => (0, 0),
            };
            if dir == Direction::Bottom {
                // members are [-180..=-158] ∪ [158..=180]
                let start = members.iter().copied().find(|d| *d > 0).unwrap_or(lo);
                let end = members.iter().copied().filter(|d| *d < 0).last().unwrap_or(hi);
                (dir, start, end)
            } else {
                (dir, lo, hi)
            }
        })
        .collect()
}
