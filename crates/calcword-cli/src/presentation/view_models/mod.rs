pub mod catalog;
pub mod common;
pub mod config;
pub mod display;
pub mod guide;
pub mod result;
pub mod spelling;
pub mod tui;

pub use catalog::{ExampleEntry, ExamplesViewModel, ResourceEntry};
pub use common::{OutputFormat, StatusLevel, ViewMode, ViewOptions};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use display::{CellViewModel, DisplayPanelViewModel, DisplayViewModel};
pub use guide::GuideViewModel;
pub use result::{CommandResultViewModel, StatusBadge, Tip};
pub use spelling::{EncodeViewModel, SpellViewModel};
pub use tui::{StatusBarViewModel, TuiScreenViewModel};

use std::fmt;

/// Bridge from a ViewModel to its text (and optionally SVG) rendering
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;

    /// SVG document, for ViewModels that are drawings
    fn create_svg(&self) -> Option<String> {
        None
    }
}
