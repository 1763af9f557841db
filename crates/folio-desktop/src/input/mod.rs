//! Input routing module
//!
//! Discrete events supplied by the host UI runtime, and a pointer router
//! that turns raw pointer gestures into those operations.

mod event;
mod router;
mod result;

pub use event::InputEvent;
pub use router::{InputRouter, PointerGesture};
pub use result::InputResult;
