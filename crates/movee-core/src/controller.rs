//! The movable-element controller.
//!
//! [`Movee`] owns the document it steers. Every directional operation is a
//! boundary check followed by at most one write of the movee's offset: the
//! step is either applied in full or not at all.

use crate::document::Document;
use crate::error::ConfigurationError;
use crate::geometry::{Bounds, Direction, GeometrySnapshot, Offset};
use crate::step::StepSize;

/// How container and movee measurements are obtained for boundary checks.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GeometryMode {
    /// Re-read sizes and padding from the document before every move.
    #[default]
    Live,
    /// Use the sizes and padding captured at configuration time.
    Snapshot,
}

/// Result of a directional command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Offset, to: Offset },
    /// The step would have crossed the container's edge; nothing changed.
    Blocked,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Binds a movee element to move inside a container element.
#[derive(Debug)]
pub struct Movee<D> {
    document: D,
    container_id: String,
    movee_id: String,
    step_size: StepSize,
    mode: GeometryMode,
    snapshot: GeometrySnapshot,
    bounds: Bounds,
    position: Offset,
}

impl<D: Document> Movee<D> {
    /// Resolves both regions and captures their geometry.
    ///
    /// Fails when either region is missing, the step is not positive, the
    /// movee cannot fit in the container, or it starts outside its bounds.
    pub fn configure(
        document: D,
        container_id: impl Into<String>,
        movee_id: impl Into<String>,
        step_size: i64,
    ) -> Result<Self, ConfigurationError> {
        Self::configure_with(
            document,
            container_id,
            movee_id,
            step_size,
            GeometryMode::default(),
        )
    }

    pub fn configure_with(
        document: D,
        container_id: impl Into<String>,
        movee_id: impl Into<String>,
        step_size: i64,
        mode: GeometryMode,
    ) -> Result<Self, ConfigurationError> {
        let container_id = container_id.into();
        let movee_id = movee_id.into();

        let container = document
            .region(&container_id)
            .ok_or_else(|| ConfigurationError::MissingRegion(container_id.clone()))?;
        let movee = document
            .region(&movee_id)
            .ok_or_else(|| ConfigurationError::MissingRegion(movee_id.clone()))?;
        let step = StepSize::new(step_size)?;

        let snapshot = GeometrySnapshot::from_regions(&container, &movee);
        let bounds = snapshot.bounds()?;
        let position = Offset::from_region(&movee);
        if !bounds.contains(position) {
            return Err(ConfigurationError::PlacementOutOfBounds {
                offset: position,
                max: bounds.max(),
            });
        }

        tracing::debug!(
            container = %container_id,
            movee = %movee_id,
            %step,
            %mode,
            ?snapshot,
            "movee configured"
        );

        Ok(Self {
            document,
            container_id,
            movee_id,
            step_size: step,
            mode,
            snapshot,
            bounds,
            position,
        })
    }

    /// Replaces the step size. On error the previous step is kept.
    pub fn set_step_size(&mut self, px: i64) -> Result<StepSize, ConfigurationError> {
        self.apply_step(StepSize::new(px))
    }

    /// Parses and applies a step size coming from a text control.
    pub fn set_step_size_str(&mut self, raw: &str) -> Result<StepSize, ConfigurationError> {
        self.apply_step(raw.parse())
    }

    fn apply_step(
        &mut self,
        step: Result<StepSize, ConfigurationError>,
    ) -> Result<StepSize, ConfigurationError> {
        match step {
            Ok(step) => {
                tracing::debug!(from = %self.step_size, to = %step, "step size changed");
                self.step_size = step;
                Ok(step)
            }
            Err(err) => {
                tracing::warn!(current = %self.step_size, "{err}");
                Err(err)
            }
        }
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.step(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.step(Direction::Right)
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.step(Direction::Up)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.step(Direction::Down)
    }

    /// Moves one step in `direction` if the movee stays inside the container.
    ///
    /// In `Live` mode a container that shrank under the movee only lets it
    /// step back toward the interior until it is inside again.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.current_position();
        let bounds = self.current_bounds();

        let Some(to) = bounds.and_then(|bounds| bounds.step(from, direction, self.step_size.get()))
        else {
            tracing::trace!(%direction, ?from, step = %self.step_size, "move blocked");
            return MoveOutcome::Blocked;
        };

        if !self.document.place(&self.movee_id, to) {
            tracing::warn!(movee = %self.movee_id, "movee disappeared from document");
            return MoveOutcome::Blocked;
        }
        self.position = to;

        tracing::debug!(%direction, ?from, ?to, "movee moved");
        MoveOutcome::Moved { from, to }
    }

    /// Offset read back from the document, falling back to the last written one.
    fn current_position(&self) -> Offset {
        self.document
            .region(&self.movee_id)
            .map(|region| Offset::from_region(&region))
            .unwrap_or(self.position)
    }

    fn current_bounds(&mut self) -> Option<Bounds> {
        if self.mode == GeometryMode::Snapshot {
            return Some(self.bounds);
        }

        let container = self.document.region(&self.container_id);
        let movee = self.document.region(&self.movee_id);
        let (Some(container), Some(movee)) = (container, movee) else {
            tracing::warn!(
                container = %self.container_id,
                movee = %self.movee_id,
                "region vanished, using configured geometry"
            );
            return Some(self.bounds);
        };

        let snapshot = GeometrySnapshot::from_regions(&container, &movee);
        if snapshot == self.snapshot {
            return Some(self.bounds);
        }

        match snapshot.bounds() {
            Ok(bounds) => {
                tracing::debug!(?snapshot, "geometry changed since last move");
                self.snapshot = snapshot;
                self.bounds = bounds;
                Some(bounds)
            }
            Err(err) => {
                tracing::warn!("{err}; movement suspended");
                None
            }
        }
    }

    pub fn position(&self) -> Offset {
        self.current_position()
    }

    pub fn step_size(&self) -> StepSize {
        self.step_size
    }

    pub fn mode(&self) -> GeometryMode {
        self.mode
    }

    /// Geometry used by the most recent boundary check.
    pub fn geometry(&self) -> GeometrySnapshot {
        self.snapshot
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn movee_id(&self) -> &str {
        &self.movee_id
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access for hosts that resize regions.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
