//! Pinch classification policy.
//!
//! The landmark producer hands us two fingertip positions (or a precomputed
//! pixel distance); a pinch is declared when the thumb/index distance falls
//! strictly below the threshold. This is a single fixed threshold with no
//! hysteresis: a hand held right at the boundary can flicker between pinching
//! and not across frames. Known limitation, kept as-is.

use crate::model::Landmark;

/// Euclidean thumb/index distance in pixel space. Each normalized coordinate
/// is scaled by the respective canvas dimension before measuring.
pub fn pinch_distance(thumb_tip: Landmark, index_tip: Landmark, scale_x: f64, scale_y: f64) -> f64 {
    ((thumb_tip.x - index_tip.x) * scale_x).hypot((thumb_tip.y - index_tip.y) * scale_y)
}

/// Apply the threshold to an already-computed pixel distance.
pub fn classify(distance_px: f64, threshold_px: f64) -> bool {
    distance_px < threshold_px
}

/// Convenience: classify straight from the two fingertip landmarks.
pub fn is_pinching(
    thumb_tip: Landmark,
    index_tip: Landmark,
    scale_x: f64,
    scale_y: f64,
    threshold_px: f64,
) -> bool {
    classify(pinch_distance(thumb_tip, index_tip, scale_x, scale_y), threshold_px)
}
