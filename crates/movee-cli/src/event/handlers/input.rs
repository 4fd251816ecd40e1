//! Input handling (keyboard, mouse and the step field).

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseEvent,
};
use movee_core::{Dispatch, InputEvent, MoveOutcome};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::{KeyAction, StepEdit};
use crate::message::Feedback;

impl EventLoop {
    /// Drains pending terminal events. Returns `true` when the user quits.
    pub(in crate::event) fn handle_input_tick(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key)
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                TermEvent::Resize(_, _) => {
                    self.needs_redraw = true;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key, self.app_state.focus);
        self.apply(action)
    }

    pub(in crate::event) fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let action = self.input.handle_mouse(mouse, self.app_state.layout.as_ref());
        self.apply(action)
    }

    fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => {
                tracing::info!(position = ?self.movee.position(), "quit requested");
                return true;
            }
            KeyAction::Dispatch(event) => self.dispatch(&event),
            KeyAction::FocusStepInput => {
                self.app_state.focus_step_input(self.movee.step_size());
                self.needs_redraw = true;
            }
            KeyAction::EditStep(StepEdit::Push(ch)) => {
                self.app_state.push_step_char(ch);
                self.needs_redraw = true;
            }
            KeyAction::EditStep(StepEdit::Pop) => {
                self.app_state.pop_step_char();
                self.needs_redraw = true;
            }
            KeyAction::CommitStep => {
                let value = self.app_state.take_step_buffer();
                let event = self.input.step_change(value);
                self.dispatch(&event);
                self.needs_redraw = true;
            }
            KeyAction::CancelEdit => {
                self.app_state.cancel_edit();
                self.needs_redraw = true;
            }
            KeyAction::None => {}
        }
        false
    }

    /// Runs one bound operation. Blocked moves and unbound input stay silent.
    fn dispatch(&mut self, event: &InputEvent) {
        match self.bindings.dispatch(&mut self.movee, event) {
            Ok(Dispatch::Moved(MoveOutcome::Moved { .. })) => self.needs_redraw = true,
            Ok(Dispatch::Moved(MoveOutcome::Blocked)) | Ok(Dispatch::Ignored) => {}
            Ok(Dispatch::StepSizeChanged(step)) => {
                self.messages.push(Feedback::StepChanged(step));
                self.needs_redraw = true;
            }
            Err(err) => {
                self.messages
                    .push(Feedback::step_rejected(&err, self.movee.step_size()));
                self.needs_redraw = true;
            }
        }
    }
}
