//! The software input driver: position smoothing, pinch classification,
//! click arbitration and synthetic event emission.

pub mod classify;
pub mod session;
pub mod sink;
pub mod smoothing;

pub use session::CursorSession;
pub use sink::{InputEventSink, RecordedEvent, RecordedTarget, RecordingSink};
