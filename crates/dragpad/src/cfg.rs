//! Tunables for the drag control.
//!
//! Defaults reproduce the stock control: a 10-unit tap tolerance, a drag
//! radius of 0.45 × button height, a 1.1× scale while dragging and a 50%
//! power dead-zone before any direction is reported.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default per-axis tap tolerance, in screen units.
pub const CLICK_DRAG_TOLERANCE: f64 = 10.0;
/// Default drag radius as a fraction of the button height.
pub const DRAG_RADIUS_RATIO: f64 = 0.45;
/// Default scale applied while a drag is in progress.
pub const ACTIVE_SCALE: f64 = 1.1;
/// Default scale at rest.
pub const REST_SCALE: f64 = 1.0;
/// Default minimum power (percent of radius) for a direction to count.
pub const POWER_THRESHOLD: u8 = 50;

/// Drag control configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragCfg {
    /// A gesture is a tap while both axis deltas stay strictly below this.
    pub click_tolerance: f64,
    /// Drag radius = button height × `radius_ratio`.
    pub radius_ratio: f64,
    /// Scale handed to the host on the `Pressed → Dragging` edge.
    pub active_scale: f64,
    /// Scale handed to the host on release.
    pub rest_scale: f64,
    /// Directions activate at `power >= power_threshold`.
    pub power_threshold: u8,
}

impl Default for DragCfg {
    fn default() -> Self {
        Self {
            click_tolerance: CLICK_DRAG_TOLERANCE,
            radius_ratio: DRAG_RADIUS_RATIO,
            active_scale: ACTIVE_SCALE,
            rest_scale: REST_SCALE,
            power_threshold: POWER_THRESHOLD,
        }
    }
}

impl DragCfg {
    pub fn with_click_tolerance(mut self, tolerance: f64) -> Self {
        self.click_tolerance = tolerance;
        self
    }

    pub fn with_radius_ratio(mut self, ratio: f64) -> Self {
        self.radius_ratio = ratio;
        self
    }

    pub fn with_power_threshold(mut self, threshold: u8) -> Self {
        self.power_threshold = threshold;
        self
    }

    /// Check every tunable; the first offending field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("click_tolerance", self.click_tolerance)?;
        positive("radius_ratio", self.radius_ratio)?;
        positive("active_scale", self.active_scale)?;
        positive("rest_scale", self.rest_scale)?;
        if self.power_threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(self.power_threshold));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = DragCfg::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.power_threshold, 50);
        assert!((cfg.radius_ratio - 0.45).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_fields() {
        let cfg = DragCfg::default().with_click_tolerance(0.0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "click_tolerance",
                value: 0.0
            })
        );
        let cfg = DragCfg::default().with_radius_ratio(f64::NAN);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "radius_ratio",
                ..
            })
        ));
        let cfg = DragCfg::default().with_power_threshold(101);
        assert_eq!(cfg.validate(), Err(ConfigError::ThresholdOutOfRange(101)));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: DragCfg = serde_json::from_str(r#"{"power_threshold": 30}"#).unwrap();
        assert_eq!(cfg.power_threshold, 30);
        assert_eq!(cfg.click_tolerance, CLICK_DRAG_TOLERANCE);
        assert_eq!(cfg.active_scale, ACTIVE_SCALE);
    }
}
