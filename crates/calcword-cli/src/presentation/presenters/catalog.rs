use calcword_engine::{Catalog, RESOURCES};
use calcword_types::InputMode;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ExampleEntry, ExamplesViewModel, ResourceEntry,
};

pub fn example_entries(catalog: &Catalog) -> Vec<ExampleEntry> {
    catalog
        .examples()
        .iter()
        .map(|example| ExampleEntry {
            word: example.word.clone(),
            number: example.number.clone(),
        })
        .collect()
}

pub fn resource_entries() -> Vec<ResourceEntry> {
    RESOURCES
        .iter()
        .map(|resource| ResourceEntry {
            title: resource.title.to_string(),
            url: resource.url.to_string(),
        })
        .collect()
}

pub fn present_examples(
    catalog: &Catalog,
    mode: InputMode,
) -> CommandResultViewModel<ExamplesViewModel> {
    let content = ExamplesViewModel {
        mode,
        examples: example_entries(catalog),
        resources: resource_entries(),
    };

    let try_it = match mode {
        InputMode::DigitsOnly => cmd::TUI,
        InputMode::LettersAndDigits => cmd::TUI_LETTERS,
    };

    CommandResultViewModel::new(content).with_tip("Try them interactively", try_it)
}
