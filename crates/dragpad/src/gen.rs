//! Seeded synthetic gestures.
//!
//! Purpose
//! - Produce reproducible Down/Move*/Up sequences around a frame for
//!   benchmarks, fuzz-style tests and CLI sampling.
//!
//! Model
//! - The press lands somewhere on the button (within 0.4 × height of the rest
//!   position).
//! - With probability `tap_prob` the gesture is a tap: a few moves jittering
//!   within `tap_jitter`, released near the press point.
//! - Otherwise the pointer walks outward along a wobbling heading up to
//!   `reach × radius`, then either releases where it is or returns to the
//!   press point first (`return_prob`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::DragCfg;
use crate::engine::{Frame, PointerEvent};
use crate::error::ConfigError;
use crate::replay::GestureScript;

/// Synthetic gesture parameters.
#[derive(Clone, Copy, Debug)]
pub struct GestureCfg {
    /// Number of Move events in a drag (at least 1).
    pub moves: usize,
    /// Farthest pointer excursion as a multiple of the drag radius.
    pub reach: f64,
    /// Heading jitter per move, radians.
    pub wobble: f64,
    /// Probability that a gesture is a tap.
    pub tap_prob: f64,
    /// Per-axis jitter of tap gestures.
    pub tap_jitter: f64,
    /// Probability that a drag returns to its press point before release.
    pub return_prob: f64,
}

impl Default for GestureCfg {
    fn default() -> Self {
        Self {
            moves: 12,
            reach: 1.6,
            wobble: 0.15,
            tap_prob: 0.2,
            tap_jitter: 4.0,
            return_prob: 0.25,
        }
    }
}

impl GestureCfg {
    /// Reject probabilities that are NaN or outside [0, 1] and non-finite spreads.
    pub fn validate(&self) -> Result<(), ConfigError> {
        probability("tap_prob", self.tap_prob)?;
        probability("return_prob", self.return_prob)?;
        for (field, value) in [
            ("reach", self.reach),
            ("wobble", self.wobble),
            ("tap_jitter", self.tap_jitter),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        Ok(())
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAProbability { field, value })
    }
}

/// `p` clamped to [0, 1]; NaN counts as 0.
#[inline]
fn chance(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one gesture (Down, Move*, Up) for a button at `frame`.
///
/// Out-of-range probabilities are clamped, NaN reads as 0 and non-finite
/// spreads are ignored; call `GestureCfg::validate` first to reject them instead.
pub fn draw_gesture(
    frame: Frame,
    drag: &DragCfg,
    cfg: GestureCfg,
    tok: ReplayToken,
) -> Vec<PointerEvent> {
    let mut rng = tok.to_std_rng();
    let anchor = frame.position();
    let grab = frame.height.abs() * 0.4;
    let press =
        anchor + Vector2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)) * grab;
    let moves = cfg.moves.max(1);

    let mut events = Vec::with_capacity(moves + 3);
    events.push(PointerEvent::down(press.x, press.y));

    if rng.gen_bool(chance(cfg.tap_prob)) {
        let j = cfg.tap_jitter.abs();
        let jitter = |rng: &mut StdRng| {
            if j.is_finite() && j > 0.0 {
                press + Vector2::new(rng.gen_range(-j..=j), rng.gen_range(-j..=j))
            } else {
                press
            }
        };
        for _ in 0..rng.gen_range(0..=3) {
            let p = jitter(&mut rng);
            events.push(PointerEvent::moved(p.x, p.y));
        }
        let p = jitter(&mut rng);
        events.push(PointerEvent::up(p.x, p.y));
        return events;
    }

    let radius = frame.height * drag.radius_ratio;
    let far = cfg.reach.max(0.0) * radius;
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut last = press;
    for k in 1..=moves {
        if cfg.wobble.is_finite() && cfg.wobble > 0.0 {
            heading += rng.gen_range(-cfg.wobble..=cfg.wobble);
        }
        let t = k as f64 / moves as f64;
        last = press + Vector2::new(heading.cos(), heading.sin()) * (far * t);
        events.push(PointerEvent::moved(last.x, last.y));
    }
    if rng.gen_bool(chance(cfg.return_prob)) {
        events.push(PointerEvent::moved(press.x, press.y));
        last = press;
    }
    events.push(PointerEvent::up(last.x, last.y));
    events
}

/// Draw `count` consecutive gestures into one script.
pub fn draw_script(
    frame: Frame,
    drag: DragCfg,
    cfg: GestureCfg,
    seed: u64,
    count: u64,
) -> GestureScript {
    let events = (0..count)
        .flat_map(|index| draw_gesture(frame, &drag, cfg, ReplayToken { seed, index }))
        .collect();
    GestureScript {
        frame,
        config: Some(drag),
        events,
    }
}
