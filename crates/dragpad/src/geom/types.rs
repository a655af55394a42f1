//! Direction sectors.
//!
//! Sectors are numbered 1..=8 counter-clockwise starting at Right; each spans
//! 45° centred on its compass heading (with a one-degree bias from the
//! integer rounding in `from_angle`).

use serde::{Deserialize, Serialize};

use crate::signal::Flag;

/// Compass-style classification of a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Zero displacement.
    None,
    Right,
    TopRight,
    Top,
    TopLeft,
    Left,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// The eight proper directions, in sector order 1..=8.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::TopRight,
        Direction::Top,
        Direction::TopLeft,
        Direction::Left,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// Classify a whole-degree angle (0° = up, clockwise positive).
    ///
    /// The angle is re-expressed as a counter-clockwise bearing `a` from the
    /// right-hand axis, then bucketed as `(a + 22) / 45 + 1` with 9 wrapping
    /// back to 1. Total: every integer maps to one of the eight directions.
    /// Angles outside [-180, 180] are wrapped into range first.
    pub fn from_angle(angle: i32) -> Direction {
        let angle = if (-180..=180).contains(&angle) {
            angle
        } else {
            let wrapped = angle.rem_euclid(360);
            if wrapped > 180 {
                wrapped - 360
            } else {
                wrapped
            }
        };
        let a = if angle <= 0 {
            -angle + 90
        } else if angle <= 90 {
            90 - angle
        } else {
            360 - (angle - 90)
        };
        let mut sector = (a + 22) / 45 + 1;
        if sector > 8 {
            sector = 1;
        }
        Direction::from_sector(sector as u8)
    }

    /// Sector index 1..=8 to direction; anything else is `None`.
    pub fn from_sector(sector: u8) -> Direction {
        match sector {
            1 => Direction::Right,
            2 => Direction::TopRight,
            3 => Direction::Top,
            4 => Direction::TopLeft,
            5 => Direction::Left,
            6 => Direction::BottomLeft,
            7 => Direction::Bottom,
            8 => Direction::BottomRight,
            _ => Direction::None,
        }
    }

    /// Sector index 1..=8, or 0 for `None`.
    pub fn sector(self) -> u8 {
        match self {
            Direction::None => 0,
            Direction::Right => 1,
            Direction::TopRight => 2,
            Direction::Top => 3,
            Direction::TopLeft => 4,
            Direction::Left => 5,
            Direction::BottomLeft => 6,
            Direction::Bottom => 7,
            Direction::BottomRight => 8,
        }
    }

    /// The signal raised while this direction is active.
    pub fn flag(self) -> Option<Flag> {
        match self {
            Direction::None => None,
            Direction::Right => Some(Flag::Right),
            Direction::TopRight => Some(Flag::TopRight),
            Direction::Top => Some(Flag::Top),
            Direction::TopLeft => Some(Flag::TopLeft),
            Direction::Left => Some(Flag::Left),
            Direction::BottomLeft => Some(Flag::BottomLeft),
            Direction::Bottom => Some(Flag::Bottom),
            Direction::BottomRight => Some(Flag::BottomRight),
        }
    }
}
