//! UI state that lives outside the controller: focus and the step edit buffer.

use movee_core::StepSize;

use crate::presentation::ui::ScreenLayout;

/// Widget receiving keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the box.
    #[default]
    Movement,
    /// Keys edit the step size field.
    StepInput,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Pending text of the step size field while it has focus.
    pub step_buffer: String,
    /// Layout of the last frame, used for mouse hit testing.
    pub layout: Option<ScreenLayout>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focuses the step field, pre-filled with the current value.
    pub fn focus_step_input(&mut self, current: StepSize) {
        self.focus = Focus::StepInput;
        self.step_buffer = current.get().to_string();
    }

    pub fn push_step_char(&mut self, ch: char) {
        if ch.is_ascii_digit() || (ch == '-' && self.step_buffer.is_empty()) {
            self.step_buffer.push(ch);
        }
    }

    pub fn pop_step_char(&mut self) {
        self.step_buffer.pop();
    }

    /// Leaves the step field and hands back what was typed.
    pub fn take_step_buffer(&mut self) -> String {
        self.focus = Focus::Movement;
        std::mem::take(&mut self.step_buffer)
    }

    pub fn cancel_edit(&mut self) {
        self.focus = Focus::Movement;
        self.step_buffer.clear();
    }

    pub fn is_editing(&self) -> bool {
        self.focus == Focus::StepInput
    }
}
