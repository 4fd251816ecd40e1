//! Glue code tying the scene, the controller and the terminal UI together.
use anyhow::Result;
use movee_core::{ControlIds, MovementBindings, Movee, MoveeConfig, setup_movement};

use crate::{config::CliConfig, event::EventLoop, presentation::terminal, scene::Scene};

pub struct MoveeApp {
    config: CliConfig,
    movee: Movee<Scene>,
    bindings: MovementBindings,
}

impl MoveeApp {
    /// Builds the scene and wires the controller and its controls.
    ///
    /// Any missing element or invalid setting aborts here, before the
    /// terminal is touched.
    pub fn new(config: CliConfig) -> Result<Self> {
        let ids = MoveeConfig::from(&config);
        let controls = ControlIds::default();
        let scene = Scene::from_config(&config.scene, &ids, &controls);

        let movee = Movee::configure_with(
            scene,
            ids.container_id,
            ids.movee_id,
            i64::from(ids.step_size),
            config.movement.geometry,
        )?;
        let bindings = setup_movement(&movee, controls)?;

        Ok(Self {
            config,
            movee,
            bindings,
        })
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("movee starting...");

        let MoveeApp {
            config,
            movee,
            bindings,
        } = self;

        let event_loop = EventLoop::new(movee, bindings, config.ui);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let movee = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(position = ?movee.position(), "movee exiting");

        Ok(())
    }
}
