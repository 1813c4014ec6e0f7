//! Event handling for maxline.
//!
//! Terminal input is read from crossterm's async event stream and mapped to
//! store actions. Resizes become actions too, so the grid is re-measured on
//! the next frame.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, KeyBinding, Modifiers};
