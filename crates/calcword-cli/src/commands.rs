use super::args::{Cli, Commands, ConfigCommand, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::logging::{self, LogTarget};
use crate::presentation::presenters;
use anyhow::Result;
use calcword_types::InputMode;

pub fn run(cli: Cli) -> Result<()> {
    // The TUI owns the terminal; its logs go to a file or nowhere
    let fallback = match cli.command {
        Some(Commands::Tui) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, LogTarget::file_or(cli.log_file.clone(), fallback))?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?
        .with_overrides(cli.mode.map(InputMode::from), cli.width)?;
    tracing::debug!(
        path = %config_path.display(),
        mode = %config.display.mode,
        width = %config.display.width,
        "effective config"
    );

    let Some(command) = cli.command else {
        let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
        return ctx.render(presenters::present_guide(
            config.display.mode,
            config_path.exists(),
        ));
    };

    match command {
        Commands::Render {
            value,
            upside_down,
            both,
            view_mode,
        } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::render::handle(&config, &value, upside_down, both, &ctx)
        }

        Commands::Spell { value, view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::spell::handle(&value, &ctx)
        }

        Commands::Encode { word, view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::encode::handle(&word, &ctx)
        }

        Commands::Examples { view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::examples::handle(&config, &ctx)
        }

        Commands::Tui => handlers::tui::handle(&config),

        Commands::Config { command } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, &config, &ctx),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, &ctx)
                }
            }
        }
    }
}
