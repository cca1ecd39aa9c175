//! Hand-gesture virtual mouse.
//!
//! Turns a stream of normalized hand samples (position + pinch distance) from
//! an external hand-tracking producer into synthetic mouse/pointer input that
//! drives any pre-existing DOM interface, with no cooperation from that
//! interface. The `cursor` module is the engine proper (smoothing, pinch
//! classification, click arbitration, event synthesis); `dom` binds it to a
//! live document; `components` hosts it in a yew overlay.

pub mod components;
pub mod cursor;
pub mod dom;
pub mod model;
pub mod util;
