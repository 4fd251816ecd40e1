//! Screen layout and the main render entry point.
use anyhow::Result;
use movee_core::{Direction, Movee};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout, Position, Rect},
};

use crate::{
    message::MessageLog,
    presentation::{theme::RatatuiTheme, widgets},
    scene::Scene,
    state::AppState,
};

const HEADER_HEIGHT: u16 = 3;
const CONTROLS_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const BUTTON_WIDTH: u16 = 11;
const STEP_INPUT_WIDTH: u16 = 18;

/// Everything a frame needs to draw.
pub struct RenderContext<'a> {
    pub movee: &'a Movee<Scene>,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Where each part of the screen was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub container: Rect,
    pub controls: ControlsLayout,
    pub messages: Rect,
    pub footer: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlsLayout {
    /// Trigger buttons in [`Direction::ALL`] order.
    pub buttons: [Rect; 4],
    pub step_input: Rect,
}

/// Clickable element under the mouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Trigger(Direction),
    StepInput,
}

impl ScreenLayout {
    pub fn new(area: Rect, message_panel_height: u16) -> Self {
        let [header, container, controls, messages, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(message_panel_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [left, down, up, right, step_input, _] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(STEP_INPUT_WIDTH),
            Constraint::Min(0),
        ])
        .areas(controls);

        Self {
            header,
            container,
            controls: ControlsLayout {
                buttons: [left, down, up, right],
                step_input,
            },
            messages,
            footer,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        Direction::ALL
            .into_iter()
            .find(|&direction| self.controls.trigger(direction).contains(position))
            .map(HitTarget::Trigger)
            .or_else(|| {
                self.controls
                    .step_input
                    .contains(position)
                    .then_some(HitTarget::StepInput)
            })
    }
}

impl ControlsLayout {
    pub fn trigger(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Left => self.buttons[0],
            Direction::Down => self.buttons[1],
            Direction::Up => self.buttons[2],
            Direction::Right => self.buttons[3],
        }
    }
}

/// Draws one frame and returns the layout used, for later hit testing.
pub fn render<B: Backend>(
    terminal: &mut Terminal<B>,
    ctx: &RenderContext,
) -> Result<ScreenLayout> {
    let mut drawn = None;
    terminal.draw(|frame| drawn = Some(draw(frame, ctx)))?;
    Ok(drawn.unwrap_or_else(|| ScreenLayout::new(Rect::default(), ctx.message_panel_height)))
}

/// Composes every widget into `frame`.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) -> ScreenLayout {
    let theme = RatatuiTheme;
    let layout = ScreenLayout::new(frame.area(), ctx.message_panel_height);

    widgets::header::render(frame, layout.header, ctx.movee, &theme);
    widgets::container::render(frame, layout.container, ctx.movee, &theme);
    widgets::controls::render(
        frame,
        &layout.controls,
        ctx.app_state,
        ctx.movee.step_size(),
        &theme,
    );
    widgets::messages::render(frame, layout.messages, ctx.messages, &theme);
    widgets::footer::render(frame, layout.footer, ctx.app_state.focus, &theme);

    layout
}
