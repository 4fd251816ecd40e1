//! CLI configuration loaded from the environment.
use std::{env, path::PathBuf};

use movee_core::{ConfigurationError, GeometryMode, MoveeConfig, StepSize};

/// Terminal front end configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub movement: MovementConfig,
    pub scene: SceneConfig,
    pub ui: UiConfig,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MOVEE_STEP_SIZE` - Pixels per move (default: 20, must be positive)
    /// - `MOVEE_GEOMETRY` - `live` or `snapshot` (default: live)
    /// - `MOVEE_CONTAINER_WIDTH` / `MOVEE_CONTAINER_HEIGHT` - Container size (default: 500x300)
    /// - `MOVEE_CONTAINER_PADDING` - Container padding (default: 10)
    /// - `MOVEE_BOX_WIDTH` / `MOVEE_BOX_HEIGHT` - Box size (default: 50x50)
    /// - `MOVEE_FRAME_INTERVAL_MS` - Input poll interval (default: 16)
    /// - `MOVEE_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `MOVEE_LOG_DIR` - Log directory
    ///
    /// A malformed step size is a configuration error; other malformed values
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("MOVEE_STEP_SIZE") {
            config.movement.step_size = raw.parse::<StepSize>()?;
        }
        if let Some(mode) = read_env::<GeometryMode>("MOVEE_GEOMETRY") {
            config.movement.geometry = mode;
        }

        if let Some(width) = read_env::<u32>("MOVEE_CONTAINER_WIDTH") {
            config.scene.container_width = width;
        }
        if let Some(height) = read_env::<u32>("MOVEE_CONTAINER_HEIGHT") {
            config.scene.container_height = height;
        }
        if let Some(padding) = read_env::<u32>("MOVEE_CONTAINER_PADDING") {
            config.scene.padding = padding;
        }
        if let Some(width) = read_env::<u32>("MOVEE_BOX_WIDTH") {
            config.scene.box_width = width;
        }
        if let Some(height) = read_env::<u32>("MOVEE_BOX_HEIGHT") {
            config.scene.box_height = height;
        }

        if let Some(interval) = read_env::<u64>("MOVEE_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }
        if let Some(height) = read_env::<u16>("MOVEE_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config.log_dir = env::var_os("MOVEE_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}

/// Controller settings.
#[derive(Clone, Debug, Default)]
pub struct MovementConfig {
    pub step_size: StepSize,
    pub geometry: GeometryMode,
}

/// Pixel dimensions of the hosted page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub container_width: u32,
    pub container_height: u32,
    pub padding: u32,
    pub box_width: u32,
    pub box_height: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_width: 500,
            container_height: 300,
            padding: 10,
            box_width: 50,
            box_height: 50,
        }
    }
}

/// UI layout and timing.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub frame_interval_ms: u64,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    pub message_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            message_panel_height: 6,
            message_capacity: 64,
        }
    }
}

impl From<&CliConfig> for MoveeConfig {
    fn from(config: &CliConfig) -> Self {
        MoveeConfig::with_step_size(config.movement.step_size.get())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
