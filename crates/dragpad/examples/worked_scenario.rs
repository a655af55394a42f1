//! Walk through one press-drag-release gesture and print every flag edge.
//!
//! Purpose
//! - Show the engine from a host's point of view: a `RecordingHost` stands in
//!   for the rendered button and listeners print what they receive.
//!
//! Gesture
//! - Frame at (100, 100), height 100, so the drag radius is 45.
//! - Press on the rest point, drag straight up past the radius, swing down
//!   to the bottom edge, release where the press started.
//!
//! Code: crates/dragpad/src/engine/mod.rs::DragGeometryEngine::handle

use dragpad::prelude::*;

fn main() -> Result<(), dragpad::EngineError> {
    let frame = Frame::new(100.0, 100.0, 100.0);
    let mut host = RecordingHost::new(frame);
    let mut engine = DragGeometryEngine::new(DragCfg::default())?;

    engine.start()?;
    for flag in [Flag::Dragging, Flag::Top, Flag::Bottom] {
        engine.subscribe(flag, move |v| println!("  {:>8} = {v}", flag.name()))?;
    }

    let gesture = [
        PointerEvent::down(100.0, 100.0),
        PointerEvent::moved(100.0, 40.0),
        PointerEvent::moved(100.0, 145.0),
        PointerEvent::up(100.0, 100.0),
    ];
    for event in gesture {
        println!("{:?} at ({}, {})", event.action, event.x, event.y);
        let outcome = engine.handle(event, &mut host);
        println!(
            "  -> {outcome:?}; button at ({:.1}, {:.1}) scale {:.2}",
            host.position.x, host.position.y, host.scale
        );
    }

    let released = engine.stop();
    println!("taps={} released_subscriptions={released}", host.taps);
    Ok(())
}
