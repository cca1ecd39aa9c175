//! Core data types for the virtual cursor engine.

use serde::{Deserialize, Serialize};

/// Name of the CustomEvent the gesture producer dispatches on `window`,
/// carrying `{ x, y, pinchDistance, isScrolling }` in its detail.
pub const SAMPLE_EVENT: &str = "gesture-sample";

/// A point in viewport pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Normalized fingertip position as produced by the landmark model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureFlags {
    pub is_pinching: bool,
    /// Reserved for scroll gestures; never set by the current producer.
    pub is_scrolling: bool,
}

/// One sample per producer frame. `x`/`y` are normalized [0,1], with `x`
/// already mirrored by the producer so movement matches the on-screen hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub x: f64,
    pub y: f64,
    pub state: GestureFlags,
}

/// Pixel size of the surface the normalized coordinates map onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Map a normalized sample position into pixel space.
    pub fn to_pixels(self, x: f64, y: f64) -> Point {
        Point {
            x: x * self.width,
            y: y * self.height,
        }
    }
}

/// Engine tuning. Defaults match the behavior the consumer interfaces were
/// calibrated against; persisted overrides are read by the host component.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Exponential interpolation weight chasing the raw detected position.
    pub smooth_factor: f64,
    /// Thumb/index fingertip distance below which a pinch is declared.
    pub pinch_threshold_px: f64,
    /// Press-to-release time above which a release is not a click.
    pub click_max_ms: f64,
    /// Press-to-release travel above which a release is a drag, not a click.
    pub click_max_travel_px: f64,
    /// Two qualifying releases within this window collapse into a dblclick.
    pub double_click_window_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smooth_factor: 0.15,
            pinch_threshold_px: 40.0,
            click_max_ms: 500.0,
            click_max_travel_px: 15.0,
            double_click_window_ms: 500.0,
        }
    }
}
