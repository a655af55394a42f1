use serde::{Deserialize, Serialize};

use super::{Signal, Subscription, SubscriptionSet};

/// Names of the nine drag signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// A drag (not a tap) is in progress.
    Dragging,
}

impl Flag {
    /// Every flag, `Dragging` first: the order used for batch resets.
    pub const ALL: [Flag; 9] = [
        Flag::Dragging,
        Flag::Left,
        Flag::Right,
        Flag::Top,
        Flag::TopLeft,
        Flag::TopRight,
        Flag::Bottom,
        Flag::BottomLeft,
        Flag::BottomRight,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Flag::Left => "left",
            Flag::Right => "right",
            Flag::Top => "top",
            Flag::Bottom => "bottom",
            Flag::TopLeft => "top_left",
            Flag::TopRight => "top_right",
            Flag::BottomLeft => "bottom_left",
            Flag::BottomRight => "bottom_right",
            Flag::Dragging => "dragging",
        }
    }

    /// The flag forced false when this one is raised. Only Top/Bottom are paired.
    pub fn excludes(self) -> Option<Flag> {
        match self {
            Flag::Top => Some(Flag::Bottom),
            Flag::Bottom => Some(Flag::Top),
            _ => None,
        }
    }
}

/// The nine drag signals, all starting false.
#[derive(Debug)]
pub struct DirectionFlags {
    signals: [Signal<bool>; 9],
}

impl Default for DirectionFlags {
    fn default() -> Self {
        Self {
            signals: std::array::from_fn(|_| Signal::new(false)),
        }
    }
}

impl DirectionFlags {
    #[inline]
    pub fn get(&self, flag: Flag) -> bool {
        self.signals[flag.index()].get()
    }

    /// Write and deliver; returns true on an actual transition.
    #[inline]
    pub fn set(&mut self, flag: Flag, value: bool) -> bool {
        self.signals[flag.index()].set(value)
    }

    pub fn subscribe(&mut self, flag: Flag, listener: impl FnMut(&bool) + 'static) -> Subscription {
        let id = self.signals[flag.index()].subscribe(listener);
        Subscription { flag, id }
    }

    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.signals[sub.flag.index()].unsubscribe(sub.id)
    }

    /// Release every subscription in `set`; returns how many were still registered.
    pub fn release(&mut self, set: &mut SubscriptionSet) -> usize {
        let mut released = 0;
        for sub in set.drain() {
            if self.signals[sub.flag.index()].unsubscribe(sub.id) {
                released += 1;
            }
        }
        released
    }

    /// Write false to every flag, in `Flag::ALL` order, whatever the current values.
    pub fn reset(&mut self) {
        for flag in Flag::ALL {
            self.set(flag, false);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.signals.iter().map(Signal::listener_count).sum()
    }

    pub fn snapshot(&self) -> FlagSnapshot {
        FlagSnapshot {
            left: self.get(Flag::Left),
            right: self.get(Flag::Right),
            top: self.get(Flag::Top),
            bottom: self.get(Flag::Bottom),
            top_left: self.get(Flag::TopLeft),
            top_right: self.get(Flag::TopRight),
            bottom_left: self.get(Flag::BottomLeft),
            bottom_right: self.get(Flag::BottomRight),
            dragging: self.get(Flag::Dragging),
        }
    }
}

/// Values of all nine flags at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSnapshot {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
    pub dragging: bool,
}

impl FlagSnapshot {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Left => self.left,
            Flag::Right => self.right,
            Flag::Top => self.top,
            Flag::Bottom => self.bottom,
            Flag::TopLeft => self.top_left,
            Flag::TopRight => self.top_right,
            Flag::BottomLeft => self.bottom_left,
            Flag::BottomRight => self.bottom_right,
            Flag::Dragging => self.dragging,
        }
    }

    /// Raised direction flags, in `Flag::ALL` order.
    pub fn active_directions(&self) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|f| *f != Flag::Dragging && self.get(*f))
            .collect()
    }

    #[inline]
    pub fn is_clear(&self) -> bool {
        *self == FlagSnapshot::default()
    }
}
