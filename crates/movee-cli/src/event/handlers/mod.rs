//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard, mouse and step field handling
//! - `rendering`: terminal rendering
//!
//! Handlers are `impl EventLoop` blocks split by responsibility.

mod input;
mod rendering;
