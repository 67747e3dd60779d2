use std::path::Path;

use crate::args::hints::cmd;
use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, StatusBadge,
};

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        width: config.display.width.cells(),
        mode: config.display.mode,
        examples: config.examples.clone(),
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result.with_tip("Write a default config file", cmd::CONFIG_INIT);
    }
    result
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success("Config written"))
    .with_tip("Review the settings", cmd::CONFIG_SHOW)
}
