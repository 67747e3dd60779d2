use anyhow::Result;
use calcword_engine::{Calculator, InputPolicy};

use crate::config::Config;
use crate::handlers::examples::catalog_for;
use crate::presentation::renderers::TuiRenderer;

pub fn handle(config: &Config) -> Result<()> {
    let policy = InputPolicy::new(config.display.mode, config.display.width);
    tracing::info!(mode = %config.display.mode, width = %config.display.width, "starting tui");

    TuiRenderer::new(Calculator::new(policy), catalog_for(config)).run()
}
