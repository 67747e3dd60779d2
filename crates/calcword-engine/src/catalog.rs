use calcword_types::{Example, InputMode, Resource};

/// Further reading shown next to the examples
pub const RESOURCES: [Resource; 2] = [
    Resource {
        title: "Complete list of calculator-spellings words",
        url: "https://paperlined.org/apps/wikipedia/offsite_content/Calculator_spelling.txt",
    },
    Resource {
        title: "Hacker News discussion: \"Words you can spell with a calculator\"",
        url: "https://news.ycombinator.com/item?id=40763931",
    },
];

const BUILTIN: [(&str, &str); 5] = [
    ("HELLO", "07734"),
    ("SHELL", "77345"),
    ("BOOBIES", "5318008"),
    ("HILLBILLIES", "53177187714"),
    ("BOZO", "0.208"),
];

/// Example words offered for one-click selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    examples: Vec<Example>,
}

impl Catalog {
    /// Built-in examples for the given mode.
    ///
    /// Digits mode writes BOZO as `0.208` so the leading zero stays visible;
    /// letters mode uses the bare `0208`.
    pub fn builtin(mode: InputMode) -> Self {
        let examples = BUILTIN
            .iter()
            .map(|(word, number)| match (mode, *word) {
                (InputMode::LettersAndDigits, "BOZO") => Example::new(*word, "0208"),
                _ => Example::new(*word, *number),
            })
            .collect();
        Self { examples }
    }

    pub fn with_extra(mut self, extra: impl IntoIterator<Item = Example>) -> Self {
        self.examples.extend(extra);
        self
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    /// Case-insensitive lookup by word
    pub fn find(&self, word: &str) -> Option<&Example> {
        self.examples
            .iter()
            .find(|example| example.word.eq_ignore_ascii_case(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling;

    #[test]
    fn test_bozo_differs_by_mode() {
        let digits = Catalog::builtin(InputMode::DigitsOnly);
        let letters = Catalog::builtin(InputMode::LettersAndDigits);
        assert_eq!(digits.find("bozo").unwrap().number, "0.208");
        assert_eq!(letters.find("BOZO").unwrap().number, "0208");
        assert_eq!(digits.len(), 5);
    }

    #[test]
    fn test_examples_spell_their_word() {
        for mode in [InputMode::DigitsOnly, InputMode::LettersAndDigits] {
            for example in Catalog::builtin(mode).examples() {
                let reading = spelling::read_upside_down(&example.number);
                assert!(
                    reading.eq_ignore_ascii_case(&example.word),
                    "{} reads as {}",
                    example.number,
                    reading
                );

                let encoded = spelling::encode_word(&example.word).unwrap();
                assert_eq!(encoded, example.number.replace('.', ""));
            }
        }
    }

    #[test]
    fn test_extra_examples_are_appended() {
        let catalog = Catalog::builtin(InputMode::DigitsOnly)
            .with_extra([Example::new("GIGGLE", "376616")]);
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(5).unwrap().word, "GIGGLE");
    }
}
