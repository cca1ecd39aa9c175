//! Synthetic event sinks.
//!
//! `InputEventSink` is the capability the click arbitration machine drives:
//! one method per semantic action, plus the hit-test that picks the dispatch
//! target. Every implementation expands a semantic action into the
//! dual-protocol pair consumers expect from real hardware input, pointer
//! event first and then its legacy mouse twin, with `click`/`dblclick` firing
//! once (they have no pointer-family analogue). All synthesized events bubble,
//! are cancelable and carry `pointer_id=1`, `pointer_type="mouse"`,
//! `is_primary=true`, `button=0`; `buttons` is 1 while pressed and 0 on
//! release, click and double-click.

use crate::model::Point;

pub trait InputEventSink {
    /// Dispatch target handle (a DOM `Element` for the live sink).
    type Target;

    /// Hit-test the visual tree at `at` (pixels). Called fresh at each
    /// dispatch instant, never cached across a tick: press and release may
    /// land on different elements when the hand moves.
    fn element_at(&self, at: Point) -> Option<Self::Target>;

    /// pointerdown + mousedown on `target`.
    fn press(&mut self, target: &Self::Target, at: Point);

    /// pointermove + mousemove while pressed. Dispatched against the document
    /// rather than the hovered element, so drag tracking keeps flowing even
    /// after the finger leaves the pressed target.
    fn drag(&mut self, at: Point);

    fn click(&mut self, target: &Self::Target, at: Point);

    fn double_click(&mut self, target: &Self::Target, at: Point);

    /// pointerup + mouseup on `target`; any click/dblclick decision has
    /// already been dispatched.
    fn release(&mut self, target: &Self::Target, at: Point);

    /// Safety flush: mouseup against the window, regardless of state, so no
    /// consumer is left believing a press is still active.
    fn release_all(&mut self, at: Point);
}

/// Where a recorded event was aimed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedTarget {
    Element(String),
    Document,
    Window,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedEvent {
    pub name: &'static str,
    pub target: RecordedTarget,
    pub at: Point,
    pub buttons: u16,
}

/// In-memory sink for deterministic tests: hit-testing yields the scripted
/// `surface` label (or nothing) and every dispatch is appended to `events` in
/// the exact order the live DOM sink would fire them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub surface: Option<String>,
    pub events: Vec<RecordedEvent>,
}

impl RecordingSink {
    /// Sink whose hit-tests always resolve to `surface`.
    pub fn over(surface: &str) -> Self {
        Self {
            surface: Some(surface.to_string()),
            events: Vec::new(),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.name).collect()
    }

    fn log(&mut self, name: &'static str, target: RecordedTarget, at: Point, buttons: u16) {
        self.events.push(RecordedEvent {
            name,
            target,
            at,
            buttons,
        });
    }
}

impl InputEventSink for RecordingSink {
    type Target = String;

    fn element_at(&self, _at: Point) -> Option<String> {
        self.surface.clone()
    }

    fn press(&mut self, target: &String, at: Point) {
        self.log("pointerdown", RecordedTarget::Element(target.clone()), at, 1);
        self.log("mousedown", RecordedTarget::Element(target.clone()), at, 1);
    }

    fn drag(&mut self, at: Point) {
        self.log("pointermove", RecordedTarget::Document, at, 1);
        self.log("mousemove", RecordedTarget::Document, at, 1);
    }

    fn click(&mut self, target: &String, at: Point) {
        self.log("click", RecordedTarget::Element(target.clone()), at, 0);
    }

    fn double_click(&mut self, target: &String, at: Point) {
        self.log("dblclick", RecordedTarget::Element(target.clone()), at, 0);
    }

    fn release(&mut self, target: &String, at: Point) {
        self.log("pointerup", RecordedTarget::Element(target.clone()), at, 0);
        self.log("mouseup", RecordedTarget::Element(target.clone()), at, 0);
    }

    fn release_all(&mut self, at: Point) {
        self.log("mouseup", RecordedTarget::Window, at, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_expands_to_pointer_then_mouse() {
        let mut sink = RecordingSink::over("btn");
        let target = sink.element_at(Point::default()).unwrap();
        sink.press(&target, Point { x: 10.0, y: 20.0 });
        assert_eq!(sink.names(), vec!["pointerdown", "mousedown"]);
        assert!(sink.events.iter().all(|e| e.buttons == 1));
    }

    #[test]
    fn empty_sink_resolves_no_target() {
        let sink = RecordingSink::default();
        assert!(sink.element_at(Point { x: 5.0, y: 5.0 }).is_none());
    }
}
