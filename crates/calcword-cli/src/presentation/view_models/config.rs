use calcword_types::{Example, InputMode};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub width: usize,
    pub mode: InputMode,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}
