//! Recent feedback, newest on top.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{message::MessageLog, presentation::theme::RatatuiTheme};

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| Line::styled(entry.text(), theme.message(entry.level())))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
