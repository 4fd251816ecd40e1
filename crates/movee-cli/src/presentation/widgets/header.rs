//! Header widget showing position, step size and bounds.

use movee_core::Movee;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{presentation::theme::RatatuiTheme, scene::Scene};

pub fn render(frame: &mut Frame, area: Rect, movee: &Movee<Scene>, theme: &RatatuiTheme) {
    let position = movee.position();
    let max = movee.bounds().max();

    let line = Line::from(vec![
        Span::styled("Position: ", theme.label()),
        Span::styled(
            format!("({}, {})", position.left, position.top),
            theme.value(),
        ),
        Span::styled(" | Step: ", theme.label()),
        Span::styled(movee.step_size().to_string(), theme.value()),
        Span::styled(" | Range: ", theme.label()),
        Span::styled(
            format!("0..={} x 0..={}", max.left, max.top),
            theme.value(),
        ),
        Span::styled(" | Geometry: ", theme.label()),
        Span::styled(movee.mode().to_string(), theme.value()),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Movee"));

    frame.render_widget(paragraph, area);
}
