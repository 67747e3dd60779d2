use anyhow::Result;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(value: &str, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_spell(value))
}
