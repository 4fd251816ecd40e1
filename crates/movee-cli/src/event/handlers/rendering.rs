//! Rendering handlers.

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

use super::super::EventLoop;
use crate::presentation::ui;

impl EventLoop {
    /// Draws the current state and remembers the layout for hit testing.
    pub(in crate::event) fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let ctx = ui::RenderContext {
            movee: &self.movee,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.ui.message_panel_height,
        };

        let layout = ui::render(terminal, &ctx)?;
        self.app_state.layout = Some(layout);
        self.needs_redraw = false;
        Ok(())
    }
}
