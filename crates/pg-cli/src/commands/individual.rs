use super::Context;
use crate::Format;

pub fn run(ctx: &mut Context, format: Format) -> Result<(), String> {
    let c = ctx.generator.individual(&mut ctx.rng);
    super::print_characters(&[c], format)
}
