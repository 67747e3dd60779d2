//! The calculator's only mutable state: what has been typed.
//!
//! Every render recomputes from the stored value; nothing else is cached.

use calcword_types::{Example, InputMode, Orientation, RenderRequest};
use serde::Serialize;

use crate::formatter::DisplayFormatter;
use crate::input_policy::{EditOutcome, InputPolicy};

/// Normal and upside-down views of one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPair {
    pub normal: RenderRequest,
    pub upside_down: RenderRequest,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    policy: InputPolicy,
    /// Field contents as typed (letters kept in letters mode)
    typed: String,
    /// Value handed to the formatter
    value: String,
}

impl Calculator {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            policy,
            typed: String::new(),
            value: String::new(),
        }
    }

    pub fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    pub fn mode(&self) -> InputMode {
        self.policy.mode()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the field contents; a rejected edit leaves the state untouched.
    pub fn input(&mut self, proposed: &str) -> EditOutcome {
        let outcome = self.policy.apply(proposed);
        if let EditOutcome::Accepted { typed, value } = &outcome {
            self.typed.clone_from(typed);
            self.value.clone_from(value);
        }
        outcome
    }

    /// Append one keystroke to the typed text
    pub fn push(&mut self, c: char) -> EditOutcome {
        let mut proposed = self.typed.clone();
        proposed.push(c);
        self.input(&proposed)
    }

    pub fn backspace(&mut self) -> EditOutcome {
        let mut proposed = self.typed.clone();
        proposed.pop();
        self.input(&proposed)
    }

    pub fn clear(&mut self) {
        self.typed.clear();
        self.value.clear();
    }

    /// Show an example's number. Extras from configuration are arbitrary text,
    /// so the number goes through the same filter as typed input.
    pub fn select_example(&mut self, example: &Example) -> EditOutcome {
        tracing::debug!(word = %example.word, number = %example.number, "example selected");
        self.input(&example.number)
    }

    pub fn formatter(&self) -> DisplayFormatter {
        DisplayFormatter::new(self.policy.width())
    }

    pub fn render(&self, orientation: Orientation) -> RenderRequest {
        self.formatter().format(&self.value, orientation)
    }

    pub fn views(&self) -> DisplayPair {
        let (normal, upside_down) = self.formatter().format_both(&self.value);
        DisplayPair {
            normal,
            upside_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use calcword_types::DisplayWidth;

    #[test]
    fn test_starts_blank() {
        let calc = Calculator::default();
        let views = calc.views();
        assert!(views.normal.is_blank());
        assert!(views.upside_down.is_blank());
        assert_eq!(views.normal.len(), 11);
    }

    #[test]
    fn test_rejected_edit_keeps_previous_value() {
        let mut calc = Calculator::default();
        assert!(calc.input("1.5").is_accepted());
        assert!(!calc.push('.').is_accepted());
        assert_eq!(calc.value(), "1.5");
    }

    #[test]
    fn test_push_and_backspace() {
        let mut calc = Calculator::default();
        for c in "0773x4".chars() {
            let _ = calc.push(c);
        }
        assert_eq!(calc.value(), "07734");

        let _ = calc.backspace();
        assert_eq!(calc.value(), "0773");
    }

    #[test]
    fn test_push_stops_at_cap() {
        let mut calc = Calculator::default();
        for _ in 0..20 {
            let _ = calc.push('9');
        }
        assert_eq!(calc.value().len(), 12);
    }

    #[test]
    fn test_letters_mode_tracks_typed_text() {
        let policy = InputPolicy::new(InputMode::LettersAndDigits, DisplayWidth::DEFAULT);
        let mut calc = Calculator::new(policy);
        let _ = calc.input("shell");
        assert_eq!(calc.typed(), "shell");
        assert_eq!(calc.value(), "54377");

        calc.clear();
        assert_eq!(calc.typed(), "");
        assert_eq!(calc.value(), "");
    }

    #[test]
    fn test_select_example_twice_is_idempotent() {
        let catalog = Catalog::builtin(InputMode::DigitsOnly);
        let hello = catalog.find("HELLO").unwrap();

        let mut calc = Calculator::default();
        assert!(calc.select_example(hello).is_accepted());
        let first = calc.views();
        assert!(calc.select_example(hello).is_accepted());
        assert_eq!(calc.views(), first);
    }

    #[test]
    fn test_select_then_clear_returns_to_blank() {
        let catalog = Catalog::builtin(InputMode::DigitsOnly);
        let mut calc = Calculator::default();
        let _ = calc.select_example(catalog.find("BOOBIES").unwrap());
        assert_eq!(calc.render(Orientation::Normal).digits(), "    5318008");

        calc.clear();
        let normal = calc.render(Orientation::Normal);
        assert_eq!(normal.len(), 11);
        assert!(normal.is_blank());
        assert_eq!(normal.decimal_index(), None);
    }

    #[test]
    fn test_builtin_examples_pass_the_filter_unchanged() {
        for mode in [InputMode::DigitsOnly, InputMode::LettersAndDigits] {
            let mut calc = Calculator::new(InputPolicy::new(mode, DisplayWidth::DEFAULT));
            for example in Catalog::builtin(mode).examples() {
                assert!(calc.select_example(example).is_accepted());
                assert_eq!(calc.value(), example.number);
            }
        }
    }

    #[test]
    fn test_example_with_two_separators_is_rejected() {
        let mut calc = Calculator::default();
        let _ = calc.input("42");

        let outcome = calc.select_example(&Example::new("X", "1.2.3"));
        assert!(!outcome.is_accepted());
        assert_eq!(calc.value(), "42");
    }

    #[test]
    fn test_long_example_is_capped() {
        let mut calc = Calculator::default();
        let _ = calc.select_example(&Example::new("LONG", "12345678901234567890"));
        assert_eq!(calc.value(), "123456789012");
        assert_eq!(calc.views().normal.len(), 11);
    }

    #[test]
    fn test_letters_mode_example_is_converted() {
        let policy = InputPolicy::new(InputMode::LettersAndDigits, DisplayWidth::DEFAULT);
        let mut calc = Calculator::new(policy);
        assert!(calc.select_example(&Example::new("HELLO", "hello")).is_accepted());
        assert_eq!(calc.typed(), "hello");
        assert_eq!(calc.value(), "07734");
        assert_eq!(calc.render(Orientation::Normal).digits(), "      07734");
    }
}
