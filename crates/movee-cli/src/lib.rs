//! Terminal front end for the movee widget.
//!
//! Hosts a pixel-space [`Scene`] in the terminal: the container and its box
//! are scaled onto character cells, four clickable buttons and the arrow keys
//! move the box, and a numeric field edits the step size.
//!
//! # Architecture
//!
//! - `scene`: in-memory document the controller reads and writes
//! - `input`: crossterm events to binder events
//! - `event`: single-threaded loop, one input event handled per turn
//! - `presentation`: ratatui layout and widgets

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod message;
pub mod presentation;
mod scene;
mod state;

pub use app::MoveeApp;
pub use config::{CliConfig, MovementConfig, SceneConfig, UiConfig};
pub use scene::Scene;
