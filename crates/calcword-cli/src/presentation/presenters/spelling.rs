use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, EncodeViewModel, SpellViewModel, StatusBadge,
};

pub fn present_spell(value: &str) -> CommandResultViewModel<SpellViewModel> {
    let content = SpellViewModel {
        value: value.to_string(),
        reading: calcword_engine::read_upside_down(value),
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.reading.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No readable digits"))
            .with_tip("Find the number for a word", cmd::ENCODE);
    }
    result
}

pub fn present_encode(word: &str, number: String) -> CommandResultViewModel<EncodeViewModel> {
    let preview = cmd::RENDER_BOTH.replace("<value>", &number);
    CommandResultViewModel::new(EncodeViewModel {
        word: word.to_string(),
        number,
    })
    .with_tip("See it on the display", preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_spell() {
        let result = present_spell("5318008");
        assert_eq!(result.content.reading, "BOOBIES");
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_present_spell_without_digits_warns() {
        let result = present_spell("..");
        assert!(result.content.reading.is_empty());
        assert!(result.badge.is_some());
    }

    #[test]
    fn test_present_encode_suggests_preview() {
        let result = present_encode("hello", "07734".to_string());
        assert_eq!(result.tips[0].command, "calcword render 07734 --both");
    }
}
