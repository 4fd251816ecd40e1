#![allow(dead_code)]

use std::collections::HashMap;

use movee_core::{ControlKind, Document, MoveeConfig, Offset, RegionGeometry};

/// In-memory page mirroring the reference layout.
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub regions: HashMap<String, RegionGeometry>,
    pub controls: HashMap<String, ControlKind>,
}

impl Page {
    pub fn new(width: f64, height: f64, padding: f64, box_size: f64) -> Self {
        let mut page = Self::default();
        page.regions.insert(
            MoveeConfig::CONTAINER_ID.to_string(),
            RegionGeometry::new(0.0, 0.0, width, height).with_padding(padding),
        );
        page.regions.insert(
            MoveeConfig::MOVEE_ID.to_string(),
            RegionGeometry::new(0.0, 0.0, box_size, box_size),
        );
        for id in [
            MoveeConfig::MOVE_LEFT_ID,
            MoveeConfig::MOVE_DOWN_ID,
            MoveeConfig::MOVE_UP_ID,
            MoveeConfig::MOVE_RIGHT_ID,
        ] {
            page.controls.insert(id.to_string(), ControlKind::Button);
        }
        page.controls
            .insert(MoveeConfig::STEP_INPUT_ID.to_string(), ControlKind::NumberInput);
        page
    }

    pub fn reference() -> Self {
        Self::new(500.0, 300.0, 10.0, 50.0)
    }

    pub fn with_box_at(mut self, left: f64, top: f64) -> Self {
        if let Some(region) = self.regions.get_mut(MoveeConfig::MOVEE_ID) {
            region.left = left;
            region.top = top;
        }
        self
    }

    pub fn without_control(mut self, id: &str) -> Self {
        self.controls.remove(id);
        self
    }
}

impl Document for Page {
    fn region(&self, id: &str) -> Option<RegionGeometry> {
        self.regions.get(id).copied()
    }

    fn control(&self, id: &str) -> Option<ControlKind> {
        self.controls.get(id).copied()
    }

    fn place(&mut self, id: &str, offset: Offset) -> bool {
        match self.regions.get_mut(id) {
            Some(region) => {
                region.left = f64::from(offset.left);
                region.top = f64::from(offset.top);
                true
            }
            None => false,
        }
    }
}
