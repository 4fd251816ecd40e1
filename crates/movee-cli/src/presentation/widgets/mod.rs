//! Widgets composing the terminal screen.

pub mod container;
pub mod controls;
pub mod footer;
pub mod header;
pub mod messages;
