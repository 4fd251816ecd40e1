//! The container panel with the box scaled from pixels onto cells.

use movee_core::{GeometrySnapshot, Movee, Offset, Px, Size};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::{presentation::theme::RatatuiTheme, scene::Scene};

pub fn render(frame: &mut Frame, area: Rect, movee: &Movee<Scene>, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.container())
        .title(movee.container_id().to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let geometry = movee.geometry();
    for strip in padding_strips(inner, &geometry) {
        frame.render_widget(Block::default().style(theme.padding()), strip);
    }

    let cells = project(inner, geometry.container, movee.position(), geometry.movee);
    if cells.is_empty() {
        return;
    }
    let label = Paragraph::new(movee.movee_id().to_string())
        .alignment(Alignment::Center)
        .style(theme.movee());
    frame.render_widget(label, cells);
}

/// Maps a pixel rectangle inside `container` onto the cells of `inner`.
///
/// A visible box always covers at least one cell.
pub fn project(inner: Rect, container: Size, origin: Offset, size: Size) -> Rect {
    if inner.is_empty() || container.width <= 0 || container.height <= 0 {
        return Rect::new(inner.x, inner.y, 0, 0);
    }

    let (x, width) = project_span(origin.left, size.width, container.width, inner.width);
    let (y, height) = project_span(origin.top, size.height, container.height, inner.height);

    Rect::new(inner.x + x, inner.y + y, width, height)
}

fn project_span(start: Px, length: Px, extent: Px, cells: u16) -> (u16, u16) {
    let first = scale(start, extent, cells).min(cells.saturating_sub(1));
    let last = scale(start.saturating_add(length), extent, cells);
    let span = if length > 0 { last.saturating_sub(first).max(1) } else { 0 };
    (first, span.min(cells - first))
}

fn scale(value: Px, extent: Px, cells: u16) -> u16 {
    let value = i64::from(value.clamp(0, extent));
    let scaled = value * i64::from(cells) / i64::from(extent);
    u16::try_from(scaled).unwrap_or(cells)
}

/// Trailing right and bottom strips covered by the container's padding.
fn padding_strips(inner: Rect, geometry: &GeometrySnapshot) -> Vec<Rect> {
    let container = geometry.container;
    let interior = geometry.interior();

    let right = project(
        inner,
        container,
        Offset::new(interior.width, 0),
        Size::new(geometry.padding, container.height),
    );
    let bottom = project(
        inner,
        container,
        Offset::new(0, interior.height),
        Size::new(container.width, geometry.padding),
    );

    [right, bottom]
        .into_iter()
        .filter(|strip| !strip.is_empty())
        .collect()
}
