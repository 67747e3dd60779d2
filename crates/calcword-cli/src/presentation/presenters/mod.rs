pub mod catalog;
pub mod config;
pub mod display;
pub mod guide;
pub mod spelling;
pub mod tui;

pub use catalog::present_examples;
pub use config::{present_config, present_config_init};
pub use display::{present_display, present_panel, present_render};
pub use guide::present_guide;
pub use spelling::{present_encode, present_spell};
pub use tui::{present_screen, status_after_edit, status_cleared, status_example, status_ready};
