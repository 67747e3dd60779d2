use anyhow::Result;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(word: &str, ctx: &HandlerContext) -> Result<()> {
    let number = calcword_engine::encode_word(word)?;
    ctx.render(presenters::present_encode(word, number))
}
