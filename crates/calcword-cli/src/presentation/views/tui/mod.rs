//! TUI Views and Stateful Components
//!
//! ## Views (Stateless):
//! - Take a reference to a ViewModel
//! - Only map ViewModel data to Ratatui widgets
//! - Color mapping from StatusLevel to Ratatui colors happens here
//!
//! ## Components (Stateful):
//! - Own UI state (example selection)
//! - Turn keyboard input into actions for the renderer
//! - Delegate drawing to Views

pub mod components;
pub mod input;
pub mod resources;
pub mod seven_segment;
pub mod status_bar;

pub use components::{CalculatorAction, CalculatorComponent, ExamplesComponent};
pub use input::InputFieldView;
pub use resources::ResourcesView;
pub use seven_segment::SevenSegmentView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::common::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}
