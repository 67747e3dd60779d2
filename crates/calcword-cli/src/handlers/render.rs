use anyhow::{Result, bail};
use calcword_engine::{Calculator, EditOutcome, InputPolicy};
use calcword_types::Orientation;

use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    config: &Config,
    value: &str,
    upside_down: bool,
    both: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let policy = InputPolicy::new(config.display.mode, config.display.width);
    let mut calc = Calculator::new(policy);

    if let EditOutcome::Rejected(reason) = calc.input(value) {
        tracing::debug!(value, ?reason, "render input rejected");
        bail!("'{}' has more than one decimal separator", value);
    }

    let orientations: &[Orientation] = match (upside_down, both) {
        (_, true) => &[Orientation::Normal, Orientation::UpsideDown],
        (true, false) => &[Orientation::UpsideDown],
        (false, false) => &[Orientation::Normal],
    };

    let view_model = presenters::present_render(value, &calc, orientations);
    ctx.render(view_model)
}
