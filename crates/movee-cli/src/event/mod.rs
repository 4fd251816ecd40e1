//! Event handling for the terminal UI.
//!
//! The loop polls the terminal, handles each event to completion and
//! redraws when something changed.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
