//! Setup failures.
//!
//! Only one class of error exists: bad configuration. It is raised while
//! wiring the controller or its controls, or when a step size is rejected.
//! A move that would leave the container is not an error; it is reported as
//! [`MoveOutcome::Blocked`](crate::MoveOutcome::Blocked).

use crate::document::ControlKind;
use crate::geometry::{Offset, Size};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("region `{0}` not found in document")]
    MissingRegion(String),

    #[error("control `{0}` not found in document")]
    MissingControl(String),

    #[error("control `{id}` is a {found}, expected a {expected}")]
    ControlKindMismatch {
        id: String,
        expected: ControlKind,
        found: ControlKind,
    },

    #[error("invalid step size `{0}`: expected a positive integer")]
    InvalidStepSize(String),

    #[error("movee {movee:?} does not fit inside container interior {interior:?}")]
    MoveeTooLarge { movee: Size, interior: Size },

    #[error("movee starts at {offset:?}, outside the allowed range 0..={max:?}")]
    PlacementOutOfBounds { offset: Offset, max: Offset },
}
