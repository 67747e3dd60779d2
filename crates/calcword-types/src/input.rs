use serde::{Deserialize, Serialize};
use std::fmt;

/// Which keystrokes the input field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Digits and a decimal separator
    #[default]
    #[serde(rename = "digits")]
    DigitsOnly,
    /// Digits, a decimal separator, and letters that stand in for digits
    #[serde(rename = "letters")]
    LettersAndDigits,
}

impl InputMode {
    pub fn accepts_letters(self) -> bool {
        matches!(self, InputMode::LettersAndDigits)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::DigitsOnly => write!(f, "digits"),
            InputMode::LettersAndDigits => write!(f, "letters"),
        }
    }
}

/// A word paired with the number that spells it upside down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub word: String,
    pub number: String,
}

impl Example {
    pub fn new(word: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            number: number.into(),
        }
    }

    /// Button caption, e.g. `HELLO (07734)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.word, self.number)
    }
}

/// Static outbound reference link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}
