use super::Context;
use crate::Format;

pub fn run(ctx: &mut Context, force_human: bool, format: Format) -> Result<(), String> {
    let c = ctx.generator.player(force_human, &mut ctx.rng);
    super::print_characters(&[c], format)
}
