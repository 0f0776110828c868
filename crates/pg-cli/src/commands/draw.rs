use pg_core::Draw;

use super::Context;
use crate::{Format, render};

pub fn run(ctx: &mut Context, count: usize, format: Format) -> Result<(), String> {
    if count == 0 {
        return Err("count must be at least 1".into());
    }
    let draws: Vec<Draw> = (0..count)
        .map(|_| ctx.generator.draw(&mut ctx.rng))
        .collect();

    match format {
        Format::Json => println!("{}", render::to_json(&draws)?),
        Format::Text => {
            for d in &draws {
                println!("  {}", render::draw(d));
            }
        }
    }
    Ok(())
}
