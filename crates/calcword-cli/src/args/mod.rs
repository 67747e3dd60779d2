// NOTE: Command Organization
//
// One-shot commands (render, spell, encode, examples) print and exit, so they
// compose with pipes and scripts. The interactive widget lives under `tui`.
// Display options (`--mode`, `--width`) are global because every command that
// touches the calculator honours them.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calcword")]
#[command(
    about = "Seven-segment calculator display with upside-down word spelling",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Configuration file (default: $CALCWORD_CONFIG or the user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Input policy (overrides the config file)")]
    pub mode: Option<ModeArg>,

    #[arg(long, global = true, help = "Number of integer cells (overrides the config file)")]
    pub width: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
