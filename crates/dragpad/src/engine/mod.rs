//! Drag interaction state machine.
//!
//! Purpose
//! - Consume Down/Move/Up pointer events, keep the button inside its drag
//!   circle, and publish direction flags on transition edges only.
//!
//! Model
//! - `Idle → Pressed` on Down: a session captures anchor, offset and radius.
//! - `Pressed → Dragging` on the first Move that is no longer a tap: the
//!   `Dragging` flag goes true and the host scales the button up, once.
//! - While dragging, a Move at `power >= power_threshold` raises the flag of
//!   its direction if it is not already raised. Raising Top lowers Bottom and
//!   vice versa; no other pair is exclusive.
//! - Up from any phase: the button returns to the anchor, all nine flags are
//!   written false as a batch, the scale returns to rest, and the tap callback
//!   fires when the press-to-release displacement is within tolerance.
//!
//! Out-of-sequence events
//! - Move or Up without a session are ignored.
//! - Down during a session abandons it (button home, flags reset, no tap)
//!   and opens a fresh one.
//!
//! Code cross-refs: `geom::classify`, `session::InteractionSession`,
//! `signal::{DirectionFlags, SubscriptionSet}`.

mod host;
mod types;

pub use host::{Host, RecordingHost};
pub use types::{Frame, Outcome, Phase, PointerAction, PointerEvent};

use nalgebra::Vector2;
use tracing::{debug, trace};

use crate::cfg::DragCfg;
use crate::error::{EngineError, Result};
use crate::geom::classify;
use crate::session::InteractionSession;
use crate::signal::{DirectionFlags, Flag, FlagSnapshot, Subscription, SubscriptionSet};

/// Spring-back drag control core.
#[derive(Debug)]
pub struct DragGeometryEngine {
    cfg: DragCfg,
    flags: DirectionFlags,
    phase: Phase,
    session: Option<InteractionSession>,
    scope: Option<SubscriptionSet>,
}

impl Default for DragGeometryEngine {
    fn default() -> Self {
        Self::build(DragCfg::default())
    }
}

impl DragGeometryEngine {
    /// Build an engine after validating `cfg`.
    pub fn new(cfg: DragCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::build(cfg))
    }

    fn build(cfg: DragCfg) -> Self {
        Self {
            cfg,
            flags: DirectionFlags::default(),
            phase: Phase::Idle,
            session: None,
            scope: None,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &DragCfg {
        &self.cfg
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Current value of one flag.
    #[inline]
    pub fn read(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    #[inline]
    pub fn snapshot(&self) -> FlagSnapshot {
        self.flags.snapshot()
    }

    /// Whether a subscription scope is open.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.scope.is_some()
    }

    /// Open the subscription scope.
    pub fn start(&mut self) -> Result<()> {
        if self.scope.is_some() {
            return Err(EngineError::AlreadyActive);
        }
        self.scope = Some(SubscriptionSet::default());
        debug!("engine started");
        Ok(())
    }

    /// Subscribe to `flag`; the listener gets the current value right away.
    ///
    /// The subscription belongs to the open scope and is released by `stop`.
    pub fn subscribe(
        &mut self,
        flag: Flag,
        listener: impl FnMut(&bool) + 'static,
    ) -> Result<Subscription> {
        let Some(scope) = self.scope.as_mut() else {
            return Err(EngineError::NotActive(flag));
        };
        let sub = self.flags.subscribe(flag, listener);
        scope.push(sub);
        Ok(sub)
    }

    /// Release one subscription ahead of `stop`.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        if let Some(scope) = self.scope.as_mut() {
            scope.forget(sub);
        }
        self.flags.unsubscribe(sub)
    }

    /// Close the scope, releasing all of its subscriptions. Returns how many were released.
    pub fn stop(&mut self) -> usize {
        let Some(mut scope) = self.scope.take() else {
            return 0;
        };
        let released = self.flags.release(&mut scope);
        debug!(released, "engine stopped");
        released
    }

    /// Feed one pointer event.
    pub fn handle<H: Host + ?Sized>(&mut self, event: PointerEvent, host: &mut H) -> Outcome {
        let point = event.point();
        match event.action {
            PointerAction::Down => self.press(point, host),
            PointerAction::Move => self.drag(point, host),
            PointerAction::Up => self.release(point, host),
        }
    }

    fn press<H: Host + ?Sized>(&mut self, point: Vector2<f64>, host: &mut H) -> Outcome {
        if let Some(stale) = self.session.take() {
            debug!("press during an open gesture; abandoning it");
            host.move_to(stale.anchor);
            self.flags.reset();
            host.set_scale(self.cfg.rest_scale);
        }
        let frame = host.frame();
        let session =
            InteractionSession::begin(point, frame.position(), frame.height, self.cfg.radius_ratio);
        debug!(
            anchor_x = session.anchor.x,
            anchor_y = session.anchor.y,
            radius = session.radius,
            "press"
        );
        self.session = Some(session);
        self.phase = Phase::Pressed;
        Outcome::Pressed
    }

    fn drag<H: Host + ?Sized>(&mut self, point: Vector2<f64>, host: &mut H) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            debug!(x = point.x, y = point.y, "move without press; ignored");
            return Outcome::Ignored;
        };
        if self.phase == Phase::Pressed && !session.is_tap(point, self.cfg.click_tolerance) {
            self.phase = Phase::Dragging;
            self.flags.set(Flag::Dragging, true);
            host.set_scale(self.cfg.active_scale);
            debug!("drag started");
        }

        let c = classify(
            session.candidate_position(point),
            session.anchor,
            session.radius,
            session.last_angle,
        );
        let mut raised = None;
        if self.phase == Phase::Dragging && c.power >= self.cfg.power_threshold {
            session.last_angle = c.angle;
            raised = c.direction.flag();
        }
        trace!(power = c.power, angle = c.angle, direction = ?c.direction, "move");

        if let Some(flag) = raised {
            self.raise(flag);
        }
        host.move_to(c.position);
        Outcome::Moved
    }

    fn raise(&mut self, flag: Flag) {
        if self.flags.get(flag) {
            return;
        }
        // lower the opposite first so no listener ever sees both raised
        if let Some(other) = flag.excludes() {
            self.flags.set(other, false);
        }
        self.flags.set(flag, true);
        debug!(flag = flag.name(), "direction raised");
    }

    fn release<H: Host + ?Sized>(&mut self, point: Vector2<f64>, host: &mut H) -> Outcome {
        let Some(session) = self.session.take() else {
            debug!(x = point.x, y = point.y, "release without press; ignored");
            return Outcome::Ignored;
        };
        host.move_to(session.anchor);
        self.flags.reset();
        host.set_scale(self.cfg.rest_scale);
        self.phase = Phase::Idle;

        let tap = session.is_tap(point, self.cfg.click_tolerance);
        if tap {
            host.tap();
        }
        debug!(tap, "release");
        Outcome::Released { tap }
    }
}
