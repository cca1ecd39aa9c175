//! `InputEventSink` over the live document.
//!
//! Events are built with the constructor init dictionaries so they are
//! indistinguishable, from the consumer's perspective, from hardware-driven
//! input: bubbling, cancelable, left-button, a fixed primary pointer with
//! id 1 and type "mouse". Dispatch failures are swallowed; a tick that cannot
//! fire simply has no visible effect.

use web_sys::{
    Document, Element, EventTarget, MouseEvent, MouseEventInit, PointerEvent, PointerEventInit,
    Window,
};

use crate::cursor::sink::InputEventSink;
use crate::model::Point;

pub struct DomSink {
    window: Window,
    document: Document,
}

impl DomSink {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Sink over the global window/document. Only callable in a browser.
    pub fn global() -> Self {
        let window = web_sys::window().expect("no global `window` exists");
        let document = window.document().expect("should have a document on window");
        Self { window, document }
    }

    fn mouse_event(&self, kind: &str, at: Point, pressed: bool) -> Option<MouseEvent> {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_view(Some(&self.window));
        init.set_client_x(at.x as i32);
        init.set_client_y(at.y as i32);
        init.set_button(0);
        init.set_buttons(if pressed { 1 } else { 0 });
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).ok()
    }

    fn pointer_event(&self, kind: &str, at: Point, pressed: bool) -> Option<PointerEvent> {
        let init = PointerEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_view(Some(&self.window));
        init.set_client_x(at.x as i32);
        init.set_client_y(at.y as i32);
        init.set_button(0);
        init.set_buttons(if pressed { 1 } else { 0 });
        init.set_pointer_id(1);
        init.set_pointer_type("mouse");
        init.set_is_primary(true);
        PointerEvent::new_with_event_init_dict(kind, &init).ok()
    }

    fn dispatch_pair(
        &self,
        target: &EventTarget,
        pointer_kind: &str,
        mouse_kind: &str,
        at: Point,
        pressed: bool,
    ) {
        if let Some(ev) = self.pointer_event(pointer_kind, at, pressed) {
            let _ = target.dispatch_event(&ev);
        }
        if let Some(ev) = self.mouse_event(mouse_kind, at, pressed) {
            let _ = target.dispatch_event(&ev);
        }
    }
}

impl InputEventSink for DomSink {
    type Target = Element;

    fn element_at(&self, at: Point) -> Option<Element> {
        self.document.element_from_point(at.x as f32, at.y as f32)
    }

    fn press(&mut self, target: &Element, at: Point) {
        self.dispatch_pair(target, "pointerdown", "mousedown", at, true);
    }

    fn drag(&mut self, at: Point) {
        self.dispatch_pair(&self.document, "pointermove", "mousemove", at, true);
    }

    fn click(&mut self, target: &Element, at: Point) {
        if let Some(ev) = self.mouse_event("click", at, false) {
            let _ = target.dispatch_event(&ev);
        }
    }

    fn double_click(&mut self, target: &Element, at: Point) {
        if let Some(ev) = self.mouse_event("dblclick", at, false) {
            let _ = target.dispatch_event(&ev);
        }
    }

    fn release(&mut self, target: &Element, at: Point) {
        self.dispatch_pair(target, "pointerup", "mouseup", at, false);
    }

    fn release_all(&mut self, at: Point) {
        if let Some(ev) = self.mouse_event("mouseup", at, false) {
            let _ = self.window.dispatch_event(&ev);
        }
    }
}
