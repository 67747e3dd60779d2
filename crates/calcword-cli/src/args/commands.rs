use super::common::ViewModeArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show a value on the seven-segment display")]
    Render {
        value: String,

        #[arg(long, help = "Show only the upside-down view", conflicts_with = "both")]
        upside_down: bool,

        #[arg(long, help = "Show the normal and the upside-down view")]
        both: bool,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Read a number the way it looks upside down")]
    Spell {
        value: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Find the number that spells a word upside down")]
    Encode {
        word: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "List example words and further reading")]
    Examples {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Interactive calculator display")]
    Tui,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a configuration file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
