//! Integer pixel geometry shared by the controller and its hosts.
//!
//! Documents report positions and sizes as floating point values; everything
//! downstream works in whole pixels. Reads truncate toward zero, so a box at
//! `12.9px` is treated as being at `12px`.

use crate::document::RegionGeometry;
use crate::error::ConfigurationError;

/// Whole pixels.
pub type Px = i32;

/// Truncates a document measurement toward zero.
///
/// Non-finite values read as `0`; values beyond the `i32` range saturate.
pub fn px(value: f64) -> Px {
    if value.is_finite() { value.trunc() as Px } else { 0 }
}

/// Offset of the movee from the container's top-left interior corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub left: Px,
    pub top: Px,
}

impl Offset {
    pub const ORIGIN: Self = Self { left: 0, top: 0 };

    pub const fn new(left: Px, top: Px) -> Self {
        Self { left, top }
    }

    pub fn from_region(region: &RegionGeometry) -> Self {
        Self::new(px(region.left), px(region.top))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Reads a region's size; negative extents collapse to zero.
    pub fn from_region(region: &RegionGeometry) -> Self {
        Self::new(px(region.width).max(0), px(region.height).max(0))
    }
}

/// Directional command understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::Right,
    ];

    /// Unit delta in screen coordinates (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
        }
    }
}

/// Container and movee measurements used for boundary checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeometrySnapshot {
    pub container: Size,
    /// Uniform inset subtracted from the trailing edges.
    pub padding: Px,
    pub movee: Size,
}

impl GeometrySnapshot {
    pub fn new(container: Size, padding: Px, movee: Size) -> Self {
        Self {
            container,
            padding: padding.max(0),
            movee,
        }
    }

    pub fn from_regions(container: &RegionGeometry, movee: &RegionGeometry) -> Self {
        Self::new(
            Size::from_region(container),
            px(container.padding),
            Size::from_region(movee),
        )
    }

    /// Usable extent of the container once trailing padding is removed.
    pub fn interior(&self) -> Size {
        Size::new(
            self.container.width.saturating_sub(self.padding).max(0),
            self.container.height.saturating_sub(self.padding).max(0),
        )
    }

    /// Largest offsets that keep the movee inside the interior.
    pub fn bounds(&self) -> Result<Bounds, ConfigurationError> {
        let max_left = i64::from(self.container.width)
            - i64::from(self.padding)
            - i64::from(self.movee.width);
        let max_top = i64::from(self.container.height)
            - i64::from(self.padding)
            - i64::from(self.movee.height);

        match (Px::try_from(max_left), Px::try_from(max_top)) {
            (Ok(max_left), Ok(max_top)) if max_left >= 0 && max_top >= 0 => {
                Ok(Bounds { max_left, max_top })
            }
            _ => Err(ConfigurationError::MoveeTooLarge {
                movee: self.movee,
                interior: self.interior(),
            }),
        }
    }
}

/// Legal offset range: `0..=max_left` horizontally and `0..=max_top` vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub max_left: Px,
    pub max_top: Px,
}

impl Bounds {
    pub fn max(&self) -> Offset {
        Offset::new(self.max_left, self.max_top)
    }

    pub fn contains(&self, offset: Offset) -> bool {
        (0..=self.max_left).contains(&offset.left) && (0..=self.max_top).contains(&offset.top)
    }

    /// Destination of a single step, or `None` when the step would leave the bounds.
    ///
    /// Along the axis of travel only the approached edge is checked, so a step
    /// back toward the interior is allowed even from outside. The other axis is
    /// left unchanged by the step and must already be in range.
    pub fn step(&self, from: Offset, direction: Direction, step: u32) -> Option<Offset> {
        let (dx, dy) = direction.delta();
        let step = i64::from(step);
        let left = i64::from(from.left) + i64::from(dx) * step;
        let top = i64::from(from.top) + i64::from(dy) * step;

        let horizontal = 0..=i64::from(self.max_left);
        let vertical = 0..=i64::from(self.max_top);
        let allowed = match direction {
            Direction::Left => left >= 0 && vertical.contains(&top),
            Direction::Right => left <= *horizontal.end() && vertical.contains(&top),
            Direction::Up => top >= 0 && horizontal.contains(&left),
            Direction::Down => top <= *vertical.end() && horizontal.contains(&left),
        };

        if !allowed {
            return None;
        }

        Some(Offset::new(Px::try_from(left).ok()?, Px::try_from(top).ok()?))
    }
}
