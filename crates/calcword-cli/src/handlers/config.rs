use anyhow::{Result, bail};
use std::path::Path;

use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn show(config_path: &Path, config: &Config, ctx: &HandlerContext) -> Result<()> {
    let view_model = presenters::present_config(config_path, config_path.exists(), config);
    ctx.render(view_model)
}

pub fn init(config_path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let existed = config_path.exists();
    if existed && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    ctx.render(presenters::present_config_init(config_path, existed))
}
