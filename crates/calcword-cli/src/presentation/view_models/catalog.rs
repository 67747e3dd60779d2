use calcword_types::InputMode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamplesViewModel {
    pub mode: InputMode,
    pub examples: Vec<ExampleEntry>,
    pub resources: Vec<ResourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    pub word: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub title: String,
    pub url: String,
}
