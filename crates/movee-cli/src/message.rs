//! Feedback shown in the message panel under the container.
use std::{collections::VecDeque, fmt};

use movee_core::{ConfigurationError, StepSize};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Something the session wants the user to know about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Feedback {
    Welcome { movee: String },
    StepChanged(StepSize),
    /// A step value was refused and `kept` is still in force.
    StepRejected { reason: String, kept: StepSize },
}

impl Feedback {
    pub fn step_rejected(err: &ConfigurationError, kept: StepSize) -> Self {
        Self::StepRejected {
            reason: err.to_string(),
            kept,
        }
    }

    pub fn level(&self) -> MessageLevel {
        match self {
            Self::StepRejected { .. } => MessageLevel::Warning,
            Self::Welcome { .. } | Self::StepChanged(_) => MessageLevel::Info,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome { movee } => {
                write!(f, "Move the {movee} with the arrow keys or buttons.")
            }
            Self::StepChanged(step) => write!(f, "Step size set to {step}."),
            Self::StepRejected { reason, kept } => write!(f, "{reason}; keeping {kept}."),
        }
    }
}

/// One panel line. Identical feedback in a row is folded into a counter.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub feedback: Feedback,
    pub repeats: u32,
}

impl MessageEntry {
    pub fn level(&self) -> MessageLevel {
        self.feedback.level()
    }

    pub fn text(&self) -> String {
        match self.repeats {
            0 | 1 => self.feedback.to_string(),
            n => format!("{} (x{n})", self.feedback),
        }
    }
}

/// Bounded queue; the oldest entry is dropped once full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, feedback: Feedback) {
        if let Some(last) = self.entries.back_mut() {
            if last.feedback == feedback {
                last.repeats = last.repeats.saturating_add(1);
                return;
            }
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            feedback,
            repeats: 1,
        });
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(px: i64) -> StepSize {
        StepSize::new(px).unwrap()
    }

    #[test]
    fn drops_oldest_entries_when_full() {
        let mut log = MessageLog::new(2);
        log.push(Feedback::StepChanged(step(5)));
        log.push(Feedback::StepChanged(step(10)));
        log.push(Feedback::StepChanged(step(15)));

        let texts: Vec<_> = log.recent(10).map(MessageEntry::text).collect();
        assert_eq!(texts, ["Step size set to 15px.", "Step size set to 10px."]);
    }

    #[test]
    fn repeated_feedback_is_folded() {
        let err = ConfigurationError::InvalidStepSize("0".into());
        let mut log = MessageLog::new(4);
        log.push(Feedback::step_rejected(&err, step(20)));
        log.push(Feedback::step_rejected(&err, step(20)));
        log.push(Feedback::step_rejected(&err, step(20)));

        let entries: Vec<_> = log.recent(10).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level(), MessageLevel::Warning);
        assert!(entries[0].text().ends_with("keeping 20px. (x3)"));
    }

    #[test]
    fn only_rejections_are_warnings() {
        let welcome = Feedback::Welcome {
            movee: "box".into(),
        };
        assert_eq!(welcome.level(), MessageLevel::Info);
        assert_eq!(
            welcome.to_string(),
            "Move the box with the arrow keys or buttons."
        );
        assert_eq!(Feedback::StepChanged(step(20)).level(), MessageLevel::Info);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut log = MessageLog::new(0);
        log.push(Feedback::StepChanged(step(1)));
        log.push(Feedback::StepChanged(step(2)));
        assert_eq!(log.recent(10).count(), 1);
    }
}
