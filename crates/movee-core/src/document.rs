use crate::geometry::Offset;

/// Host surface holding the container, the movee and the input controls.
///
/// Elements are addressed by string id. Geometry is reported in (possibly
/// fractional) pixels and truncated by the controller when read.
pub trait Document {
    fn region(&self, id: &str) -> Option<RegionGeometry>;
    fn control(&self, id: &str) -> Option<ControlKind>;

    /// Moves a region to `offset`. Returns `false` if no such region exists.
    fn place(&mut self, id: &str, offset: Offset) -> bool;

    fn contains_region(&self, id: &str) -> bool {
        self.region(id).is_some()
    }

    fn contains_control(&self, id: &str) -> bool {
        self.control(id).is_some()
    }
}

/// Computed layout of a rectangular region, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Uniform inner padding.
    pub padding: f64,
}

impl RegionGeometry {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            padding: 0.0,
        }
    }

    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ControlKind {
    Button,
    NumberInput,
}
