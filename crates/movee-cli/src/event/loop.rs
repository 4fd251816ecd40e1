//! Event loop driving the controller from terminal input.

use anyhow::Result;
use movee_core::{MovementBindings, Movee};
use tokio::time::{self, Duration};

use crate::{
    config::UiConfig,
    input::InputHandler,
    message::{Feedback, MessageLog},
    presentation::terminal::Tui,
    scene::Scene,
    state::AppState,
};

/// Owns the controller and all UI state for the lifetime of the session.
///
/// Each turn polls the terminal, runs every pending event to completion in
/// arrival order, then redraws if anything changed.
pub struct EventLoop {
    pub(crate) movee: Movee<Scene>,
    pub(crate) bindings: MovementBindings,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) messages: MessageLog,
    pub(crate) ui: UiConfig,
    pub(crate) needs_redraw: bool,
}

impl EventLoop {
    pub fn new(movee: Movee<Scene>, bindings: MovementBindings, ui: UiConfig) -> Self {
        let input = InputHandler::new(bindings.controls().clone());
        let mut messages = MessageLog::new(ui.message_capacity);
        messages.push(Feedback::Welcome {
            movee: movee.movee_id().to_string(),
        });

        Self {
            movee,
            bindings,
            input,
            app_state: AppState::new(),
            messages,
            ui,
            needs_redraw: true,
        }
    }

    /// Runs until the user quits, then hands the controller back.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Movee<Scene>> {
        let frame_interval = Duration::from_millis(self.ui.frame_interval_ms);

        self.render(terminal)?;

        loop {
            time::sleep(frame_interval).await;

            if self.handle_input_tick()? {
                break;
            }
            if self.needs_redraw {
                self.render(terminal)?;
            }
        }

        Ok(self.movee)
    }
}
