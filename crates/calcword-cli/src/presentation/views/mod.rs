// Views turn ViewModels into text (console) or widgets (TUI)
// CreateView impls live next to the view they build

pub mod catalog;
pub mod config;
pub mod display;
pub mod guide;
pub mod spelling;
pub mod tui;
