use nalgebra::Vector2;

use super::types::Direction;

/// Project `candidate` onto the circle of `radius` around `anchor` when it lies outside.
///
/// Points inside (or on) the circle are returned unchanged. A NaN or
/// non-positive radius collapses every point onto the anchor.
pub fn clamp(candidate: Vector2<f64>, anchor: Vector2<f64>, radius: f64) -> Vector2<f64> {
    if radius.is_nan() || radius <= 0.0 {
        return anchor;
    }
    let d = candidate - anchor;
    let dist = d.norm();
    if dist > radius {
        anchor + d * (radius / dist)
    } else {
        candidate
    }
}

/// Distance from the anchor as a truncated percentage of `radius`, saturating at 100.
pub fn power(position: Vector2<f64>, anchor: Vector2<f64>, radius: f64) -> u8 {
    if radius.is_nan() || radius <= 0.0 {
        return 0;
    }
    let dist = (position - anchor).norm();
    if dist >= radius {
        return 100;
    }
    // NaN distances saturate to 0 through the cast.
    (100.0 * dist / radius).min(100.0) as u8
}

/// Whole-degree heading of `position` seen from `anchor`, in [-180, 180].
///
/// 0° is straight up, 90° right, -90° left. Straight down is ambiguous
/// between ±180°; the sign of `previous` picks the side, so a drag that
/// sweeps through the bottom keeps a continuous sign.
pub fn angle(position: Vector2<f64>, anchor: Vector2<f64>, previous: i32) -> i32 {
    let d = position - anchor;
    if d.x > 0.0 {
        let base = (d.y / d.x).atan().to_degrees();
        if d.y < 0.0 {
            (base + 90.0) as i32
        } else if d.y > 0.0 {
            base as i32 + 90
        } else {
            90
        }
    } else if d.x < 0.0 {
        let base = (d.y / d.x).atan().to_degrees();
        if d.y < 0.0 {
            (base - 90.0) as i32
        } else if d.y > 0.0 {
            base as i32 - 90
        } else {
            -90
        }
    } else if d.y <= 0.0 {
        0
    } else if previous < 0 {
        -180
    } else {
        180
    }
}

/// Clamped position plus its power, angle and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub position: Vector2<f64>,
    pub power: u8,
    pub angle: i32,
    pub direction: Direction,
}

impl Classification {
    /// Direction that should be reported at `threshold`, if any.
    #[inline]
    pub fn active_direction(&self, threshold: u8) -> Direction {
        if self.power >= threshold {
            self.direction
        } else {
            Direction::None
        }
    }
}

/// Clamp `candidate`, then derive power, angle and direction in one pass.
///
/// `direction` is `None` only when the clamped position sits exactly on the anchor.
/// A projected position always has power 100, whatever rounding did to its distance.
pub fn classify(
    candidate: Vector2<f64>,
    anchor: Vector2<f64>,
    radius: f64,
    previous_angle: i32,
) -> Classification {
    let position = clamp(candidate, anchor, radius);
    let projected = radius > 0.0 && (candidate - anchor).norm() > radius;
    let angle = angle(position, anchor, previous_angle);
    let direction = if position == anchor {
        Direction::None
    } else {
        Direction::from_angle(angle)
    };
    Classification {
        position,
        power: if projected {
            100
        } else {
            power(position, anchor, radius)
        },
        angle,
        direction,
    }
}
