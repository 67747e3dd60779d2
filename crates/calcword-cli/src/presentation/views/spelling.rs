use std::fmt;

use crate::presentation::view_models::{
    CreateView, EncodeViewModel, SpellViewModel, ViewMode, ViewOptions,
};

impl CreateView for SpellViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(SpellView {
            data: self,
            mode: options.mode,
        })
    }
}

struct SpellView<'a> {
    data: &'a SpellViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for SpellView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Compact => writeln!(f, "{}", self.data.reading),
            _ if self.data.reading.is_empty() => {
                writeln!(f, "{} has no upside-down reading", self.data.value)
            }
            _ => writeln!(f, "{} -> {}", self.data.value, self.data.reading),
        }
    }
}

impl CreateView for EncodeViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(EncodeView {
            data: self,
            mode: options.mode,
        })
    }
}

struct EncodeView<'a> {
    data: &'a EncodeViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for EncodeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Compact => writeln!(f, "{}", self.data.number),
            _ => writeln!(f, "{} -> {}", self.data.word, self.data.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_view() {
        let vm = SpellViewModel {
            value: "07734".to_string(),
            reading: "hELLO".to_string(),
        };
        assert_eq!(
            vm.create_view(ViewOptions::default()).to_string(),
            "07734 -> hELLO\n"
        );
        assert_eq!(
            vm.create_view(ViewOptions::new(ViewMode::Compact, false))
                .to_string(),
            "hELLO\n"
        );
    }

    #[test]
    fn test_spell_view_without_letters() {
        let vm = SpellViewModel {
            value: "...".to_string(),
            reading: String::new(),
        };
        assert_eq!(
            vm.create_view(ViewOptions::default()).to_string(),
            "... has no upside-down reading\n"
        );
    }

    #[test]
    fn test_encode_view() {
        let vm = EncodeViewModel {
            word: "BOOBIES".to_string(),
            number: "5318008".to_string(),
        };
        assert_eq!(
            vm.create_view(ViewOptions::default()).to_string(),
            "BOOBIES -> 5318008\n"
        );
    }
}
