//! Input processing for the terminal UI.
//!
//! This module owns the keyboard and mouse mapping so the rest of the
//! application only deals with binder [`InputEvent`]s and a few UI-local
//! commands for the step size field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use movee_core::{ControlIds, InputEvent, Key};

use crate::presentation::ui::{HitTarget, ScreenLayout};
use crate::state::Focus;

/// High-level outcome of processing a terminal event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward to the movement bindings.
    Dispatch(InputEvent),
    FocusStepInput,
    EditStep(StepEdit),
    /// Commit the step field (the input's "change" event).
    CommitStep,
    CancelEdit,
    /// No meaningful command was produced.
    None,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepEdit {
    Push(char),
    Pop,
}

/// Translates crossterm events into commands.
pub struct InputHandler {
    controls: ControlIds,
}

impl InputHandler {
    pub fn new(controls: ControlIds) -> Self {
        Self { controls }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, focus: Focus) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match focus {
            Focus::Movement => self.handle_movement_key(key),
            Focus::StepInput => self.handle_step_key(key),
        }
    }

    fn handle_movement_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Left => key_down(Key::ArrowLeft),
            KeyCode::Down => key_down(Key::ArrowDown),
            KeyCode::Up => key_down(Key::ArrowUp),
            KeyCode::Right => key_down(Key::ArrowRight),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::FocusStepInput,
            KeyCode::Char(ch) => self.handle_char(ch),
            other => key_down(Key::Other(other.to_string())),
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' => key_down(Key::ArrowLeft),
            'j' => key_down(Key::ArrowDown),
            'k' => key_down(Key::ArrowUp),
            'l' => key_down(Key::ArrowRight),
            's' => KeyAction::FocusStepInput,
            _ => key_down(Key::Other(raw.to_string())),
        }
    }

    fn handle_step_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => KeyAction::EditStep(StepEdit::Push(ch)),
            KeyCode::Backspace => KeyAction::EditStep(StepEdit::Pop),
            KeyCode::Enter => KeyAction::CommitStep,
            KeyCode::Esc | KeyCode::Tab => KeyAction::CancelEdit,
            _ => KeyAction::None,
        }
    }

    /// Maps a left click on a rendered control to its command.
    pub fn handle_mouse(&self, mouse: MouseEvent, layout: Option<&ScreenLayout>) -> KeyAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }

        match layout.and_then(|layout| layout.hit_test(mouse.column, mouse.row)) {
            Some(HitTarget::Trigger(direction)) => KeyAction::Dispatch(InputEvent::Click(
                self.controls.trigger(direction).to_string(),
            )),
            Some(HitTarget::StepInput) => KeyAction::FocusStepInput,
            None => KeyAction::None,
        }
    }

    /// The field's "change" event carrying the typed value.
    pub fn step_change(&self, value: String) -> InputEvent {
        InputEvent::Change {
            control: self.controls.step_input.clone(),
            value,
        }
    }
}

fn key_down(key: Key) -> KeyAction {
    KeyAction::Dispatch(InputEvent::KeyDown(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use movee_core::{Direction, MoveeConfig};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn handler() -> InputHandler {
        InputHandler::new(ControlIds::default())
    }

    #[test]
    fn arrow_keys_map_one_to_one() {
        let handler = handler();
        for (code, expected) in [
            (KeyCode::Left, Key::ArrowLeft),
            (KeyCode::Down, Key::ArrowDown),
            (KeyCode::Up, Key::ArrowUp),
            (KeyCode::Right, Key::ArrowRight),
        ] {
            assert_eq!(
                handler.handle_key(key(code), Focus::Movement),
                KeyAction::Dispatch(InputEvent::KeyDown(expected))
            );
        }
    }

    #[test]
    fn vi_keys_alias_arrows() {
        let handler = handler();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('H')), Focus::Movement),
            KeyAction::Dispatch(InputEvent::KeyDown(Key::ArrowLeft))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l')), Focus::Movement),
            KeyAction::Dispatch(InputEvent::KeyDown(Key::ArrowRight))
        );
    }

    #[test]
    fn unknown_keys_are_forwarded_as_other() {
        let handler = handler();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), Focus::Movement),
            KeyAction::Dispatch(InputEvent::KeyDown(Key::Other("x".into())))
        );
        assert!(matches!(
            handler.handle_key(key(KeyCode::Enter), Focus::Movement),
            KeyAction::Dispatch(InputEvent::KeyDown(Key::Other(_)))
        ));
    }

    #[test]
    fn quit_keys() {
        let handler = handler();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Focus::Movement),
            KeyAction::Quit
        );
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, Focus::StepInput), KeyAction::Quit);
    }

    #[test]
    fn step_field_keys() {
        let handler = handler();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('7')), Focus::StepInput),
            KeyAction::EditStep(StepEdit::Push('7'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), Focus::StepInput),
            KeyAction::EditStep(StepEdit::Pop)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Focus::StepInput),
            KeyAction::CommitStep
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), Focus::StepInput),
            KeyAction::CancelEdit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), Focus::StepInput),
            KeyAction::None
        );
    }

    #[test]
    fn clicks_hit_rendered_controls() {
        let handler = handler();
        let layout = ScreenLayout::new(Rect::new(0, 0, 100, 40), 6);
        let right = layout.controls.trigger(Direction::Right);

        assert_eq!(
            handler.handle_mouse(click(right.x + 1, right.y + 1), Some(&layout)),
            KeyAction::Dispatch(InputEvent::Click(MoveeConfig::MOVE_RIGHT_ID.into()))
        );

        let input = layout.controls.step_input;
        assert_eq!(
            handler.handle_mouse(click(input.x + 1, input.y + 1), Some(&layout)),
            KeyAction::FocusStepInput
        );

        assert_eq!(handler.handle_mouse(click(0, 0), Some(&layout)), KeyAction::None);
        assert_eq!(handler.handle_mouse(click(right.x, right.y), None), KeyAction::None);
    }
}
