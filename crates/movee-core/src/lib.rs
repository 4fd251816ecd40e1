//! Bounds-checked movement of a rectangular element inside a container.
//!
//! `movee-core` owns the rules: a [`Movee`] controller steps an element around
//! a [`Document`] without ever letting it leave the container's padded
//! interior, and [`setup_movement`] wires buttons, arrow keys and a numeric
//! step control to that controller. Front ends provide the `Document` and
//! translate their native events into [`InputEvent`]s.
pub mod binding;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod geometry;
pub mod step;

pub use binding::{ControlIds, Dispatch, InputEvent, Key, MovementBindings, setup_movement};
pub use config::MoveeConfig;
pub use controller::{GeometryMode, MoveOutcome, Movee};
pub use document::{ControlKind, Document, RegionGeometry};
pub use error::ConfigurationError;
pub use geometry::{Bounds, Direction, GeometrySnapshot, Offset, Px, Size, px};
pub use step::StepSize;
