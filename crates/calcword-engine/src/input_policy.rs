//! Keystroke filtering for the input field.
//!
//! The policy decides what the stored value becomes after an edit: unsupported
//! characters are dropped, a second decimal separator rejects the whole edit,
//! and the result is capped at the display's input length.

use calcword_types::{DisplayWidth, InputMode};
use serde::Serialize;

use crate::spelling;

const DECIMAL_SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MultipleSeparators,
}

/// Result of proposing new input text
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted {
        /// Filtered and truncated text, letters preserved
        typed: String,
        /// Text handed to the formatter, letters converted to digits
        value: String,
    },
    Rejected(RejectReason),
}

impl EditOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EditOutcome::Accepted { .. })
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            EditOutcome::Accepted { value, .. } => Some(value),
            EditOutcome::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputPolicy {
    mode: InputMode,
    width: DisplayWidth,
}

impl InputPolicy {
    pub fn new(mode: InputMode, width: DisplayWidth) -> Self {
        Self { mode, width }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn width(&self) -> DisplayWidth {
        self.width
    }

    pub fn max_len(&self) -> usize {
        self.width.max_input_len()
    }

    /// Whether a single keystroke survives filtering
    pub fn allows(&self, c: char) -> bool {
        c.is_ascii_digit()
            || c == DECIMAL_SEPARATOR
            || (self.mode.accepts_letters() && spelling::letter_to_digit(c).is_some())
    }

    /// Evaluate proposed field contents.
    pub fn apply(&self, proposed: &str) -> EditOutcome {
        let filtered: String = proposed.chars().filter(|c| self.allows(*c)).collect();

        if filtered.matches(DECIMAL_SEPARATOR).count() > 1 {
            tracing::debug!(proposed, "rejected edit with more than one decimal separator");
            return EditOutcome::Rejected(RejectReason::MultipleSeparators);
        }

        let typed: String = filtered.chars().take(self.max_len()).collect();
        let value = match self.mode {
            InputMode::DigitsOnly => typed.clone(),
            InputMode::LettersAndDigits => typed
                .chars()
                .map(|c| spelling::letter_to_digit(c).unwrap_or(c))
                .collect(),
        };

        EditOutcome::Accepted { typed, value }
    }
}
