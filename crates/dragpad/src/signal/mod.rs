//! Last-value-cached observable values.
//!
//! Model
//! - A `Signal<T>` always holds a value. Subscribing replays the current value
//!   to the new listener immediately; every later write is delivered to all
//!   listeners, including writes that repeat the current value.
//! - `set` reports whether the value actually changed, so writers can tell a
//!   transition from a repeated write.
//! - Listeners are plain `FnMut` closures; everything runs on the writer's
//!   thread, synchronously, inside `set`.
//!
//! Code cross-refs: `flags::DirectionFlags` (the nine drag signals),
//! `engine::DragGeometryEngine::{start, stop}` (subscription scopes).

mod flags;

pub use flags::{DirectionFlags, Flag, FlagSnapshot};

use std::fmt;

/// Boxed listener invoked with every delivered value.
pub type Listener<T> = Box<dyn FnMut(&T)>;

/// Observable value with replay-on-subscribe.
pub struct Signal<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Store `value` and deliver it to every listener. Returns true if it differs from the previous value.
    pub fn set(&mut self, value: T) -> bool {
        let changed = self.value != value;
        self.value = value;
        let current = &self.value;
        for (_, listener) in self.listeners.iter_mut() {
            listener(current);
        }
        changed
    }

    /// Register `listener`, which first receives the current value. Returns a handle for `unsubscribe`.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&T) + 'static) -> u64 {
        listener(&self.value);
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Handle to one listener on one flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub flag: Flag,
    pub id: u64,
}

/// Subscriptions registered together and released together.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subs: Vec<Subscription>,
}

impl SubscriptionSet {
    #[inline]
    pub fn push(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    /// Forget one handle without releasing it (the caller already did).
    pub fn forget(&mut self, sub: Subscription) -> bool {
        let before = self.subs.len();
        self.subs.retain(|s| *s != sub);
        self.subs.len() != before
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Subscription> + '_ {
        self.subs.drain(..)
    }
}
