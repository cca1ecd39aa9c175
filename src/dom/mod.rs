//! Live-DOM binding for the engine: the real synthetic event sink.

mod sink;

pub use sink::DomSink;
