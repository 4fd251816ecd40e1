//! In-memory page hosting the container, the box and their controls.
use std::collections::HashMap;

use movee_core::{ControlIds, ControlKind, Document, MoveeConfig, Offset, RegionGeometry};

use crate::config::SceneConfig;

/// Pixel-space document rendered by the terminal UI.
///
/// The box starts in the container's top-left interior corner.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    regions: HashMap<String, RegionGeometry>,
    controls: HashMap<String, ControlKind>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the reference page: one container, one box, four buttons and
    /// the step input.
    pub fn from_config(config: &SceneConfig, ids: &MoveeConfig, controls: &ControlIds) -> Self {
        let mut scene = Self::new()
            .with_region(
                &ids.container_id,
                RegionGeometry::new(
                    0.0,
                    0.0,
                    f64::from(config.container_width),
                    f64::from(config.container_height),
                )
                .with_padding(f64::from(config.padding)),
            )
            .with_region(
                &ids.movee_id,
                RegionGeometry::new(
                    0.0,
                    0.0,
                    f64::from(config.box_width),
                    f64::from(config.box_height),
                ),
            );

        for id in [&controls.left, &controls.down, &controls.up, &controls.right] {
            scene = scene.with_control(id, ControlKind::Button);
        }
        scene.with_control(&controls.step_input, ControlKind::NumberInput)
    }

    pub fn with_region(mut self, id: &str, geometry: RegionGeometry) -> Self {
        self.regions.insert(id.to_string(), geometry);
        self
    }

    pub fn with_control(mut self, id: &str, kind: ControlKind) -> Self {
        self.controls.insert(id.to_string(), kind);
        self
    }
}

impl Document for Scene {
    fn region(&self, id: &str) -> Option<RegionGeometry> {
        self.regions.get(id).copied()
    }

    fn control(&self, id: &str) -> Option<ControlKind> {
        self.controls.get(id).copied()
    }

    fn place(&mut self, id: &str, offset: Offset) -> bool {
        let Some(region) = self.regions.get_mut(id) else {
            return false;
        };
        region.left = f64::from(offset.left);
        region.top = f64::from(offset.top);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_scene() -> Scene {
        Scene::from_config(
            &SceneConfig::default(),
            &MoveeConfig::default(),
            &ControlIds::default(),
        )
    }

    #[test]
    fn reference_scene_has_all_elements() {
        let scene = reference_scene();
        assert!(scene.contains_region(MoveeConfig::CONTAINER_ID));
        assert!(scene.contains_region(MoveeConfig::MOVEE_ID));
        assert_eq!(
            scene.control(MoveeConfig::MOVE_LEFT_ID),
            Some(ControlKind::Button)
        );
        assert_eq!(
            scene.control(MoveeConfig::STEP_INPUT_ID),
            Some(ControlKind::NumberInput)
        );
        assert!(!scene.contains_control("missing"));
    }

    #[test]
    fn container_carries_padding() {
        let scene = reference_scene();
        let container = scene.region(MoveeConfig::CONTAINER_ID).unwrap();
        assert_eq!(container.width, 500.0);
        assert_eq!(container.padding, 10.0);
    }

    #[test]
    fn place_updates_only_known_regions() {
        let mut scene = reference_scene();
        assert!(scene.place(MoveeConfig::MOVEE_ID, Offset::new(40, 60)));
        let movee = scene.region(MoveeConfig::MOVEE_ID).unwrap();
        assert_eq!((movee.left, movee.top), (40.0, 60.0));
        assert!(!scene.place("ghost", Offset::ORIGIN));
    }
}
