//! Click arbitration state machine.
//!
//! A `CursorSession` consumes one `GestureSample` per producer frame and
//! decides which semantic input events occurred: press on the rising pinch
//! edge, drag-tracking moves while held, and on the falling edge a
//! click / double-click / plain-release decision made against the timing and
//! travel thresholds in `Tuning`. It owns all cross-tick state for the
//! lifetime of the gesture session; nothing else mutates it. Ticks are
//! synchronous and must not be reentered; the wall clock is an explicit
//! parameter so the 500 ms windows are deterministic under test.

use super::sink::InputEventSink;
use super::smoothing;
use crate::model::{GestureSample, Point, Tuning, Viewport};

pub struct CursorSession<S: InputEventSink> {
    sink: S,
    tuning: Tuning,
    viewport: Viewport,
    /// Smoothed cursor position in pixels.
    pos: Point,
    was_pinching: bool,
    /// Meaningful only while a press is active.
    press_started_ms: f64,
    press_origin: Point,
    /// Meaningful only between a qualifying release and the next press;
    /// 0 means unset.
    last_release_ms: f64,
}

impl<S: InputEventSink> CursorSession<S> {
    pub fn new(sink: S, viewport: Viewport) -> Self {
        Self::with_tuning(sink, viewport, Tuning::default())
    }

    pub fn with_tuning(sink: S, viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            sink,
            tuning,
            viewport,
            pos: Point::default(),
            was_pinching: false,
            press_started_ms: 0.0,
            press_origin: Point::default(),
            last_release_ms: 0.0,
        }
    }

    /// Keep the [0,1] → pixel mapping current when the window resizes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Smoothed position in pixels, as of the last tick.
    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Advance the machine by one frame. `now_ms` is the host's wall clock at
    /// the time of the call. Returns the smoothed position so the host can
    /// move the visual cursor.
    pub fn tick(&mut self, sample: &GestureSample, now_ms: f64) -> Point {
        let screen = self.viewport.to_pixels(sample.x, sample.y);
        self.pos = smoothing::smooth_toward(self.pos, screen, self.tuning.smooth_factor);

        let pinching = sample.state.is_pinching;
        if pinching && !self.was_pinching {
            // Rising edge: a press starts here.
            self.press_started_ms = now_ms;
            self.press_origin = self.pos;
            if let Some(target) = self.sink.element_at(screen) {
                self.sink.press(&target, self.pos);
            }
        } else if pinching && self.was_pinching {
            // Held: keep drag tracking flowing while something is under the hand.
            if self.sink.element_at(screen).is_some() {
                self.sink.drag(self.pos);
            }
        } else if !pinching && self.was_pinching {
            self.finish_press(screen, now_ms);
        }
        // Idle with is_scrolling set would hook in scroll gestures here;
        // reserved, not implemented.

        // A frame with no detection maps to (0, 0). Flush unconditionally so a
        // consumer never ends up stuck with a press it can no longer release.
        if degenerate(screen.x) && degenerate(screen.y) {
            self.sink.release_all(self.pos);
        }

        self.was_pinching = pinching;
        self.pos
    }

    /// Falling edge: decide dblclick / click / plain release, then emit the
    /// up pair. If nothing is under the release point the whole sequence is
    /// skipped.
    fn finish_press(&mut self, screen: Point, now_ms: f64) {
        let duration_ms = now_ms - self.press_started_ms;
        let travel_px = self.pos.distance_to(self.press_origin);

        let Some(target) = self.sink.element_at(screen) else {
            return;
        };

        if self.last_release_ms > 0.0
            && now_ms - self.last_release_ms < self.tuning.double_click_window_ms
        {
            self.sink.double_click(&target, self.pos);
            // A third rapid release must start a fresh click cycle, not extend
            // this double-click.
            self.last_release_ms = 0.0;
        } else if duration_ms < self.tuning.click_max_ms
            && travel_px < self.tuning.click_max_travel_px
        {
            self.sink.click(&target, self.pos);
            self.last_release_ms = now_ms;
        }
        // Drags and slow presses fall through: up pair only.

        self.sink.release(&target, self.pos);
    }

    /// Tear the session down. An in-flight press is flushed with the safety
    /// release so the consumer interface does not stay pressed forever.
    pub fn end(&mut self) {
        if self.was_pinching {
            self.sink.release_all(self.pos);
            self.was_pinching = false;
        }
    }
}

fn degenerate(v: f64) -> bool {
    v == 0.0 || v.is_nan()
}
