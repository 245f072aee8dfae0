//! Numeric animation parameters and the small amount of math that drives the
//! decorative motion (hero parallax, about-card tilt, contact pill width).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Linear map of `value` from `input` onto `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_start == in_end {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + t * (out_end - out_start)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Mapping {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(value, self.input, self.output)
    }
}

/// Scroll-driven offsets for the hero section, keyed on window scroll Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub background: Mapping,
    pub text: Mapping,
    pub text_opacity: Mapping,
    pub chips: Mapping,
    pub chip_rotation: Mapping,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            background: Mapping::new((0.0, 1000.0), (0.0, 300.0)),
            text: Mapping::new((0.0, 500.0), (0.0, 150.0)),
            text_opacity: Mapping::new((0.0, 300.0), (1.0, 0.0)),
            chips: Mapping::new((0.0, 500.0), (0.0, -100.0)),
            chip_rotation: Mapping::new((0.0, 500.0), (0.0, 5.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub contact_entrance_ms: u64,
    pub menu_close_ms: u64,
    pub contact_compact_width: f64,
    pub contact_expanded_width: f64,
    pub tilt_max_deg: f64,
    pub tilt_range_px: f64,
    pub hero: ParallaxConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            contact_entrance_ms: 2000,
            menu_close_ms: 500,
            contact_compact_width: 200.0,
            contact_expanded_width: 380.0,
            tilt_max_deg: 10.0,
            tilt_range_px: 100.0,
            hero: ParallaxConfig::default(),
        }
    }
}

impl MotionConfig {
    pub fn contact_entrance(&self) -> Duration {
        Duration::from_millis(self.contact_entrance_ms)
    }

    pub fn menu_close(&self) -> Duration {
        Duration::from_millis(self.menu_close_ms)
    }

    pub fn contact_width(&self, expanded: bool) -> f64 {
        if expanded {
            self.contact_expanded_width
        } else {
            self.contact_compact_width
        }
    }

    /// `(rotate_x, rotate_y)` in degrees for a pointer at `(dx, dy)` from the card center.
    pub fn tilt(&self, dx: f64, dy: f64) -> (f64, f64) {
        let range = (-self.tilt_range_px, self.tilt_range_px);
        let max = self.tilt_max_deg;
        (
            interpolate(dy, range, (max, -max)),
            interpolate(dx, range, (-max, max)),
        )
    }
}
