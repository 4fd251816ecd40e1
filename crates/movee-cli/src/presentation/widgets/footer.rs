//! Key hints for the focused widget.

use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::{presentation::theme::RatatuiTheme, state::Focus};

pub fn render(frame: &mut Frame, area: Rect, focus: Focus, theme: &RatatuiTheme) {
    let hints = match focus {
        Focus::Movement => "←↓↑→ / hjkl move · click buttons · Tab/s edit step · q quit",
        Focus::StepInput => "digits edit · Backspace delete · Enter apply · Esc cancel",
    };

    frame.render_widget(Paragraph::new(hints).style(theme.label()), area);
}
