//! Overlay component hosting the gesture session.
//!
//! Owns a `CursorSession` for its mounted lifetime, feeds it one tick per
//! producer sample (pushed as a `gesture-sample` CustomEvent on `window`) and
//! mirrors the smoothed position onto a fixed-position cursor div. The vision
//! pipeline stays fully external: whatever dispatches the CustomEvent is the
//! frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::cursor::{CursorSession, classify};
use crate::dom::DomSink;
use crate::model::{GestureFlags, GestureSample, SAMPLE_EVENT, Tuning, Viewport};
use crate::util::clog;

const TUNING_STORAGE_KEY: &str = "hc_tuning";

/// Tuning overrides persisted by the host (same localStorage scheme as any
/// other app settings); falls back to defaults on any miss or parse error.
fn load_tuning() -> Tuning {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(TUNING_STORAGE_KEY) {
                if let Ok(t) = serde_json::from_str(&raw) {
                    return t;
                }
            }
        }
    }
    Tuning::default()
}

fn viewport_of(window: &web_sys::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    Viewport { width, height }
}

#[function_component(VirtualCursor)]
pub fn virtual_cursor() -> Html {
    let cursor_ref = use_node_ref();

    {
        let cursor_ref = cursor_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let tuning = load_tuning();
            let session = Rc::new(RefCell::new(CursorSession::with_tuning(
                DomSink::global(),
                viewport_of(&window),
                tuning,
            )));

            // One engine tick per producer sample.
            let sample_cb = {
                let session = session.clone();
                let cursor_ref = cursor_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::CustomEvent| {
                    let detail = e.detail();
                    let num = |key: &str| {
                        js_sys::Reflect::get(&detail, &key.into())
                            .ok()
                            .and_then(|v| v.as_f64())
                    };
                    let (Some(x), Some(y)) = (num("x"), num("y")) else {
                        return;
                    };
                    let pinch_px = num("pinchDistance").unwrap_or(f64::MAX);
                    let is_scrolling = js_sys::Reflect::get(&detail, &"isScrolling".into())
                        .ok()
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);

                    let mut s = session.borrow_mut();
                    let state = GestureFlags {
                        is_pinching: classify::classify(pinch_px, s.tuning().pinch_threshold_px),
                        is_scrolling,
                    };
                    let pos = s.tick(&GestureSample { x, y, state }, js_sys::Date::now());

                    if let Some(el) = cursor_ref.cast::<HtmlElement>() {
                        let _ = el.style().set_property(
                            "transform",
                            &format!("translate3d({}px, {}px, 0)", pos.x, pos.y),
                        );
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(SAMPLE_EVENT, sample_cb.as_ref().unchecked_ref())
                .unwrap();

            // Keep the [0,1] → pixel mapping current.
            let resize_cb = {
                let session = session.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    session.borrow_mut().set_viewport(viewport_of(&window));
                }) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            clog("virtual cursor: session started");

            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    SAMPLE_EVENT,
                    sample_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                // Flush any in-flight press before the session goes away.
                session.borrow_mut().end();
                clog("virtual cursor: session ended");
                let _keep_alive = (&sample_cb, &resize_cb);
            }
        });
    }

    html! {
        <div
            ref={cursor_ref}
            style="position:fixed; left:0; top:0; width:20px; height:20px; border-radius:50%; background:#e5534b; border:2px solid #fff; z-index:9999; pointer-events:none;"
        />
    }
}
