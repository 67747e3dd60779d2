// NOTE: calcword layering
//
// calcword-types   display data (segments, cells, render requests), no logic
// calcword-engine  pure functions plus the one piece of state (Calculator)
// calcword (this)  arguments, config file, logging, presentation, TUI
//
// Nothing below the presentation layer prints, reads the terminal, or touches
// the filesystem. Upside-down output stays a reversed digit sequence until a
// renderer turns each glyph over.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
