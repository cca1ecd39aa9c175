//! Exponential smoothing of the raw detected position.

use crate::model::Point;

/// Linear interpolation between `start` and `end`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Move `prev` toward `raw` by `factor` on each axis.
///
/// Repeated calls with a constant `raw` shrink the remaining distance by
/// `1 - factor` per call, so the cursor chases the hand with exponential
/// decay: it approaches `raw` monotonically but never algebraically reaches
/// it (unless `prev == raw`). No clamping to screen bounds; callers map the
/// normalized sample into pixel space first.
pub fn smooth_toward(prev: Point, raw: Point, factor: f64) -> Point {
    Point {
        x: lerp(prev.x, raw.x, factor),
        y: lerp(prev.y, raw.y, factor),
    }
}
