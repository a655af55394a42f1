use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dragpad::api::{
    classify_in_frame, draw_script, replay, sector_table, DragCfg, Frame, GestureCfg,
    GestureScript, Trace,
};
use dragpad::{Direction, Vec2};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "dragpad")]
#[command(about = "Replay, classify and sample drag-control gestures")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Overrides applied on top of a loaded config.
#[derive(clap::Args, Clone, Debug, Default)]
struct Tunables {
    /// JSON file with a (partial) drag config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Per-axis tap tolerance
    #[arg(long)]
    tolerance: Option<f64>,
    /// Drag radius as a fraction of the button height
    #[arg(long)]
    radius_ratio: Option<f64>,
    /// Minimum power (0..=100) at which a direction is reported
    #[arg(long)]
    threshold: Option<u8>,
}

#[derive(Subcommand)]
enum Action {
    /// Run a gesture script through the engine and write its trace
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tunables: Tunables,
    },
    /// Classify one button position against a rest point
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        anchor_x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        anchor_y: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        #[command(flatten)]
        tunables: Tunables,
    },
    /// Print the direction sectors and the direction of every `step` degrees
    Table {
        #[arg(long, default_value_t = 15)]
        step: u32,
    },
    /// Write a seeded synthetic gesture script
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        #[arg(long, default_value_t = 0.2)]
        tap_prob: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Replay {
            script,
            out,
            tunables,
        } => {
            let trace = run_replay(&script, &out, &tunables)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "steps": trace.steps.len(),
                    "edges": trace.edges().len(),
                    "taps": trace.taps,
                }))?
            );
            Ok(())
        }
        Action::Classify {
            x,
            y,
            anchor_x,
            anchor_y,
            height,
            tunables,
        } => {
            let frame = Frame::new(anchor_x, anchor_y, height);
            let value = run_classify(frame, Vec2::new(x, y), &tunables)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Action::Table { step } => {
            print!("{}", render_table(step));
            Ok(())
        }
        Action::Sample {
            seed,
            count,
            out,
            height,
            tap_prob,
        } => run_sample(seed, count, &out, height, tap_prob).map(|_| ()),
        Action::Report => {
            let doc = provenance::document(json!({}), &[], &[]);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

/// Resolve a config: `base` (or the `--config` file), then per-field flags.
fn resolve_cfg(base: DragCfg, t: &Tunables) -> Result<DragCfg> {
    let mut cfg = match &t.config {
        Some(path) => read_json::<DragCfg>(path)?,
        None => base,
    };
    if let Some(v) = t.tolerance {
        cfg = cfg.with_click_tolerance(v);
    }
    if let Some(v) = t.radius_ratio {
        cfg = cfg.with_radius_ratio(v);
    }
    if let Some(v) = t.threshold {
        cfg = cfg.with_power_threshold(v);
    }
    cfg.validate().context("invalid drag config")?;
    Ok(cfg)
}

fn run_replay(script_path: &Path, out: &Path, t: &Tunables) -> Result<Trace> {
    let script: GestureScript = read_json(script_path)?;
    let cfg = resolve_cfg(script.cfg_or(DragCfg::default()), t)?;
    tracing::info!(
        script = %script_path.display(),
        events = script.events.len(),
        "replay"
    );
    let trace = replay(&script, cfg).context("replaying script")?;
    write_json(out, &trace)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({ "command": "replay", "config": cfg })).with_input(script_path),
    )?;
    Ok(trace)
}

fn run_classify(frame: Frame, position: Vec2<f64>, t: &Tunables) -> Result<Value> {
    let cfg = resolve_cfg(DragCfg::default(), t)?;
    let c = classify_in_frame(frame, &cfg, position);
    Ok(json!({
        "position": [c.position.x, c.position.y],
        "power": c.power,
        "angle": c.angle,
        "direction": c.direction,
        "reported": c.active_direction(cfg.power_threshold),
    }))
}

fn render_table(step: u32) -> String {
    let mut out = String::from("sector direction      from    to\n");
    for (dir, from, to) in sector_table() {
        out.push_str(&format!(
            "{:>6} {:<13} {:>5} {:>5}\n",
            dir.sector(),
            format!("{dir:?}"),
            from,
            to
        ));
    }
    out.push_str("\nangle direction\n");
    let step = step.max(1) as usize;
    for deg in (-180..=180).step_by(step) {
        out.push_str(&format!("{deg:>5} {:?}\n", Direction::from_angle(deg)));
    }
    out
}

fn run_sample(seed: u64, count: u64, out: &Path, height: f64, tap_prob: f64) -> Result<PathBuf> {
    let frame = Frame::new(0.0, 0.0, height);
    let gesture = GestureCfg {
        tap_prob,
        ..GestureCfg::default()
    };
    gesture.validate().context("invalid gesture parameters")?;
    let script = draw_script(frame, DragCfg::default(), gesture, seed, count);
    tracing::info!(seed, count, events = script.events.len(), "sample");
    write_json(out, &script)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "command": "sample",
            "seed": seed,
            "count": count,
            "height": height,
            "tap_prob": tap_prob,
        })),
    )
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WORKED: &str = r#"{
        "frame": {"x": 100, "y": 100, "height": 100},
        "events": [
            {"action": "down", "x": 100, "y": 100},
            {"action": "move", "x": 100, "y": 40},
            {"action": "move", "x": 100, "y": 145},
            {"action": "up", "x": 100, "y": 100}
        ]
    }"#;

    #[test]
    fn replay_writes_trace_and_sidecar() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("worked.json");
        fs::write(&script, WORKED).unwrap();
        let out = dir.path().join("out/trace.json");

        let trace = run_replay(&script, &out, &Tunables::default()).unwrap();
        assert_eq!(trace.taps, 1);
        let written: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["steps"].as_array().map(Vec::len), Some(4));
        assert!(dir.path().join("out/trace.provenance.json").exists());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cfg.json");
        fs::write(&cfg_path, r#"{"power_threshold": 90, "click_tolerance": 3}"#).unwrap();
        let t = Tunables {
            config: Some(cfg_path),
            threshold: Some(20),
            ..Tunables::default()
        };
        let cfg = resolve_cfg(DragCfg::default(), &t).unwrap();
        assert_eq!(cfg.power_threshold, 20);
        assert_eq!(cfg.click_tolerance, 3.0);
        assert_eq!(cfg.radius_ratio, DragCfg::default().radius_ratio);

        let bad = Tunables {
            radius_ratio: Some(0.0),
            ..Tunables::default()
        };
        assert!(resolve_cfg(DragCfg::default(), &bad).is_err());
    }

    #[test]
    fn classify_reports_direction_above_threshold() {
        let frame = Frame::new(0.0, 0.0, 100.0);
        let up = run_classify(frame, Vec2::new(0.0, -60.0), &Tunables::default()).unwrap();
        assert_eq!(up["power"], 100);
        assert_eq!(up["direction"], "top");
        assert_eq!(up["reported"], "top");
        let weak = run_classify(frame, Vec2::new(10.0, 0.0), &Tunables::default()).unwrap();
        assert_eq!(weak["direction"], "right");
        assert_eq!(weak["reported"], "none");
    }

    #[test]
    fn sample_roundtrips_through_replay() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sample.json");
        let sidecar = run_sample(5, 4, &out, 80.0, 0.5).unwrap();
        assert!(sidecar.ends_with("sample.provenance.json"));
        let script: GestureScript = read_json(&out).unwrap();
        assert!(script.events.len() >= 8);
        let trace = replay(&script, script.cfg_or(DragCfg::default())).unwrap();
        assert_eq!(trace.steps.len(), script.events.len());
    }

    #[test]
    fn sample_rejects_bad_tap_probability() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sample.json");
        for p in [f64::NAN, -0.1, 2.0] {
            let err = run_sample(5, 4, &out, 80.0, p).unwrap_err();
            assert!(format!("{err:#}").contains("tap_prob"), "{err:#}");
        }
        assert!(!out.exists());
    }

    #[test]
    fn table_lists_every_sector() {
        let table = render_table(45);
        assert!(table.contains("Top"));
        assert!(table.contains("BottomRight"));
        // -180, -135, ..., 180
        let rows = table.lines().skip_while(|l| !l.starts_with("angle")).count() - 1;
        assert_eq!(rows, 9);
    }
}
