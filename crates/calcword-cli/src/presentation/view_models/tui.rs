use serde::Serialize;

use super::catalog::{ExampleEntry, ResourceEntry};
use super::common::StatusLevel;
use super::display::DisplayViewModel;

/// One frame of the interactive widget
#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub display: DisplayViewModel,
    pub examples: Vec<ExampleEntry>,
    pub resources: Vec<ResourceEntry>,
    pub status: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub max_len: usize,
}
