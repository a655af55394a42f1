//! Scripted gestures run through a recording host.
//!
//! A `GestureScript` is a host frame plus a list of pointer events (and an
//! optional config). `replay` runs it through a fresh engine, records a step
//! per event, and subscribes to all nine flags so that every delivered value
//! is captured as a `Notification` in delivery order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cfg::DragCfg;
use crate::engine::{DragGeometryEngine, Frame, Outcome, Phase, PointerEvent, RecordingHost};
use crate::error::Result;
use crate::signal::{Flag, FlagSnapshot};

/// Frame, optional tunables, and the events of one or more gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DragCfg>,
    pub events: Vec<PointerEvent>,
}

impl GestureScript {
    /// Script config if present, else `fallback`.
    pub fn cfg_or(&self, fallback: DragCfg) -> DragCfg {
        self.config.unwrap_or(fallback)
    }
}

/// State after one event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: PointerEvent,
    pub outcome: Outcome,
    pub phase: Phase,
    pub position: [f64; 2],
    pub scale: f64,
    pub flags: FlagSnapshot,
}

/// One value delivered to a flag listener. `step` is `None` for the replay at subscribe time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub step: Option<usize>,
    pub flag: Flag,
    pub value: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub notifications: Vec<Notification>,
    pub taps: usize,
}

impl Trace {
    /// Notifications that changed their flag's value (repeated writes dropped).
    pub fn edges(&self) -> Vec<Notification> {
        let mut last = FlagSnapshot::default();
        let mut out = Vec::new();
        for n in &self.notifications {
            if last.get(n.flag) != n.value {
                out.push(*n);
            }
            set_flag(&mut last, n.flag, n.value);
        }
        out
    }
}

fn set_flag(snap: &mut FlagSnapshot, flag: Flag, value: bool) {
    let slot = match flag {
        Flag::Left => &mut snap.left,
        Flag::Right => &mut snap.right,
        Flag::Top => &mut snap.top,
        Flag::Bottom => &mut snap.bottom,
        Flag::TopLeft => &mut snap.top_left,
        Flag::TopRight => &mut snap.top_right,
        Flag::BottomLeft => &mut snap.bottom_left,
        Flag::BottomRight => &mut snap.bottom_right,
        Flag::Dragging => &mut snap.dragging,
    };
    *slot = value;
}

/// Run `script` through a fresh engine configured with `cfg`.
pub fn replay(script: &GestureScript, cfg: DragCfg) -> Result<Trace> {
    let mut engine = DragGeometryEngine::new(cfg)?;
    let mut host = RecordingHost::new(script.frame);

    let current = Rc::new(Cell::new(None::<usize>));
    let log = Rc::new(RefCell::new(Vec::new()));
    engine.start()?;
    for flag in Flag::ALL {
        let step = Rc::clone(&current);
        let sink = Rc::clone(&log);
        engine.subscribe(flag, move |value| {
            sink.borrow_mut().push(Notification {
                step: step.get(),
                flag,
                value: *value,
            });
        })?;
    }

    let mut steps = Vec::with_capacity(script.events.len());
    for (index, event) in script.events.iter().enumerate() {
        current.set(Some(index));
        let outcome = engine.handle(*event, &mut host);
        steps.push(Step {
            index,
            event: *event,
            outcome,
            phase: engine.phase(),
            position: [host.position.x, host.position.y],
            scale: host.scale,
            flags: engine.snapshot(),
        });
    }
    engine.stop();

    let notifications = log.borrow().clone();
    tracing::debug!(
        events = script.events.len(),
        notifications = notifications.len(),
        taps = host.taps,
        "replay finished"
    );
    Ok(Trace {
        steps,
        notifications,
        taps: host.taps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn worked_script() -> GestureScript {
        serde_json::from_str(
            r#"{
                "frame": {"x": 100, "y": 100, "height": 100},
                "events": [
                    {"action": "down", "x": 100, "y": 100},
                    {"action": "move", "x": 100, "y": 40},
                    {"action": "move", "x": 100, "y": 145},
                    {"action": "up", "x": 100, "y": 100}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn worked_script_trace() {
        let script = worked_script();
        let trace = replay(&script, script.cfg_or(DragCfg::default())).unwrap();
        assert_eq!(trace.steps.len(), 4);
        assert_eq!(trace.taps, 1);
        assert!(trace.steps[1].flags.top);
        assert_eq!(trace.steps[1].position, [100.0, 55.0]);
        assert!(trace.steps[2].flags.bottom && !trace.steps[2].flags.top);
        assert!(trace.steps[3].flags.is_clear());
        assert_eq!(trace.steps[3].outcome, Outcome::Released { tap: true });

        let edges: Vec<(Option<usize>, Flag, bool)> = trace
            .edges()
            .into_iter()
            .map(|n| (n.step, n.flag, n.value))
            .collect();
        assert_eq!(
            edges,
            vec![
                (Some(1), Flag::Dragging, true),
                (Some(1), Flag::Top, true),
                (Some(2), Flag::Top, false),
                (Some(2), Flag::Bottom, true),
                (Some(3), Flag::Dragging, false),
                (Some(3), Flag::Bottom, false),
            ]
        );
        // subscribe-time replay of all nine, plus every repeated write
        assert!(trace.notifications.len() > edges.len() + 9);
        assert_eq!(
            trace.notifications.iter().filter(|n| n.step.is_none()).count(),
            9
        );
    }

    #[test]
    fn script_config_overrides_fallback() {
        let mut script = worked_script();
        script.config = Some(DragCfg::default().with_click_tolerance(1.0));
        let cfg = script.cfg_or(DragCfg::default());
        assert_eq!(cfg.click_tolerance, 1.0);

        script.config = Some(DragCfg::default().with_radius_ratio(-1.0));
        let err = replay(&script, script.cfg_or(DragCfg::default())).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn trace_serializes() {
        let script = worked_script();
        let trace = replay(&script, DragCfg::default()).unwrap();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["steps"][3]["outcome"]["kind"], "released");
        assert_eq!(json["steps"][3]["outcome"]["tap"], true);
        assert_eq!(json["notifications"][0]["flag"], "dragging");
    }
}
