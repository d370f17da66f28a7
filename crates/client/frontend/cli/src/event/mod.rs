//! Event handling for CLI client.
//!
//! This module contains the frame loop that drains keyboard input, ticks the
//! engine and draws the view the engine left on screen.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
