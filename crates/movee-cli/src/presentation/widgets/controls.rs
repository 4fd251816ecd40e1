//! Directional buttons and the step size field.

use movee_core::{Direction, StepSize};
use ratatui::{
    Frame,
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::{theme::RatatuiTheme, ui::ControlsLayout},
    state::AppState,
};

pub fn render(
    frame: &mut Frame,
    layout: &ControlsLayout,
    app_state: &AppState,
    step: StepSize,
    theme: &RatatuiTheme,
) {
    for direction in Direction::ALL {
        let button = Paragraph::new(button_label(direction))
            .alignment(Alignment::Center)
            .style(theme.button())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, layout.trigger(direction));
    }

    let focused = app_state.is_editing();
    let value = if focused {
        format!("{}_", app_state.step_buffer)
    } else {
        step.get().to_string()
    };
    let input = Paragraph::new(value)
        .style(theme.input(focused))
        .block(Block::default().borders(Borders::ALL).title("step px"));
    frame.render_widget(input, layout.step_input);
}

fn button_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "◀ Left",
        Direction::Down => "▼ Down",
        Direction::Up => "▲ Up",
        Direction::Right => "▶ Right",
    }
}
