use anyhow::Result;
use calcword_engine::Catalog;

use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn catalog_for(config: &Config) -> Catalog {
    Catalog::builtin(config.display.mode).with_extra(config.examples.iter().cloned())
}

pub fn handle(config: &Config, ctx: &HandlerContext) -> Result<()> {
    let catalog = catalog_for(config);
    ctx.render(presenters::present_examples(&catalog, config.display.mode))
}
