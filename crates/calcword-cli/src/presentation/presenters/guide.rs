use calcword_types::InputMode;

use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, GuideViewModel, Tip};

pub fn present_guide(
    mode: InputMode,
    config_exists: bool,
) -> CommandResultViewModel<GuideViewModel> {
    let mut commands = vec![
        Tip::new("Draw a number", cmd::RENDER),
        Tip::new("Draw it both ways up", cmd::RENDER_BOTH),
        Tip::new("Read a number upside down", cmd::SPELL),
        Tip::new("Find the number for a word", cmd::ENCODE),
        Tip::new("List example words", cmd::EXAMPLES),
        Tip::new("Interactive calculator", cmd::TUI),
    ];
    if !config_exists {
        commands.push(Tip::new("Write a default config file", cmd::CONFIG_INIT));
    }

    CommandResultViewModel::new(GuideViewModel {
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode,
        config_exists,
        commands,
    })
}
