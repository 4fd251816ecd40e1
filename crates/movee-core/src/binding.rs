//! Wiring of input controls to a [`Movee`].
//!
//! [`setup_movement`] checks that every referenced control exists with the
//! expected kind and returns [`MovementBindings`], a stateless router from
//! host input events to controller operations. Hosts feed it clicks, key
//! presses and value changes; each event runs exactly one operation.

use crate::config::MoveeConfig;
use crate::controller::{MoveOutcome, Movee};
use crate::document::{ControlKind, Document};
use crate::error::ConfigurationError;
use crate::geometry::Direction;
use crate::step::StepSize;

/// Ids of the controls driving a movee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlIds {
    pub left: String,
    pub down: String,
    pub up: String,
    pub right: String,
    /// Numeric input that sets the step size.
    pub step_input: String,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            left: MoveeConfig::MOVE_LEFT_ID.to_string(),
            down: MoveeConfig::MOVE_DOWN_ID.to_string(),
            up: MoveeConfig::MOVE_UP_ID.to_string(),
            right: MoveeConfig::MOVE_RIGHT_ID.to_string(),
            step_input: MoveeConfig::STEP_INPUT_ID.to_string(),
        }
    }
}

impl ControlIds {
    /// Trigger id for each direction.
    pub fn trigger(&self, direction: Direction) -> &str {
        match direction {
            Direction::Left => &self.left,
            Direction::Down => &self.down,
            Direction::Up => &self.up,
            Direction::Right => &self.right,
        }
    }
}

/// Named key, modelled on DOM `KeyboardEvent.code` values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowRight => Some(Direction::Right),
            Key::Other(_) => None,
        }
    }
}

/// Host input, already stripped of toolkit specifics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Click(String),
    KeyDown(Key),
    Change { control: String, value: String },
}

/// What a dispatched event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Moved(MoveOutcome),
    StepSizeChanged(StepSize),
    /// The event is not bound to anything.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct MovementBindings {
    controls: ControlIds,
}

/// Validates the controls in `movee`'s document and binds them.
pub fn setup_movement<D: Document>(
    movee: &Movee<D>,
    controls: ControlIds,
) -> Result<MovementBindings, ConfigurationError> {
    let document = movee.document();
    for direction in Direction::ALL {
        expect_control(document, controls.trigger(direction), ControlKind::Button)?;
    }
    expect_control(document, &controls.step_input, ControlKind::NumberInput)?;

    tracing::debug!(?controls, "movement controls bound");
    Ok(MovementBindings { controls })
}

fn expect_control<D: Document>(
    document: &D,
    id: &str,
    expected: ControlKind,
) -> Result<(), ConfigurationError> {
    match document.control(id) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(ConfigurationError::ControlKindMismatch {
            id: id.to_string(),
            expected,
            found,
        }),
        None => Err(ConfigurationError::MissingControl(id.to_string())),
    }
}

impl MovementBindings {
    pub fn controls(&self) -> &ControlIds {
        &self.controls
    }

    /// Direction triggered by clicking `control`, if it is one of the four triggers.
    pub fn trigger_direction(&self, control: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.controls.trigger(direction) == control)
    }

    /// Runs the operation bound to `event`.
    ///
    /// Blocked moves and unbound events are not errors. A rejected step value
    /// returns [`ConfigurationError::InvalidStepSize`] with the step unchanged.
    pub fn dispatch<D: Document>(
        &self,
        movee: &mut Movee<D>,
        event: &InputEvent,
    ) -> Result<Dispatch, ConfigurationError> {
        let direction = match event {
            InputEvent::Click(control) => self.trigger_direction(control),
            InputEvent::KeyDown(key) => key.direction(),
            InputEvent::Change { control, value } if *control == self.controls.step_input => {
                return movee.set_step_size_str(value).map(Dispatch::StepSizeChanged);
            }
            InputEvent::Change { .. } => None,
        };

        Ok(direction
            .map(|direction| Dispatch::Moved(movee.step(direction)))
            .unwrap_or(Dispatch::Ignored))
    }
}
