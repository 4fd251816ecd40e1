/// Movement defaults and the element ids of the reference page layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveeConfig {
    /// Pixels moved per directional command.
    pub step_size: u32,
    pub container_id: String,
    pub movee_id: String,
}

impl MoveeConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STEP_SIZE: u32 = 20;

    // ===== default element ids =====
    pub const CONTAINER_ID: &'static str = "container";
    pub const MOVEE_ID: &'static str = "box";
    pub const MOVE_LEFT_ID: &'static str = "moveLeft";
    pub const MOVE_DOWN_ID: &'static str = "moveDown";
    pub const MOVE_UP_ID: &'static str = "moveUp";
    pub const MOVE_RIGHT_ID: &'static str = "moveRight";
    pub const STEP_INPUT_ID: &'static str = "pxInputID";

    pub fn new() -> Self {
        Self {
            step_size: Self::DEFAULT_STEP_SIZE,
            container_id: Self::CONTAINER_ID.to_string(),
            movee_id: Self::MOVEE_ID.to_string(),
        }
    }

    pub fn with_step_size(step_size: u32) -> Self {
        Self {
            step_size,
            ..Self::new()
        }
    }
}

impl Default for MoveeConfig {
    fn default() -> Self {
        Self::new()
    }
}
