use pg_generator::{GenerateOptions, MAX_PARTY_SIZE};

use super::Context;
use crate::Format;

pub fn run(
    ctx: &mut Context,
    size: Option<usize>,
    cultural: Option<usize>,
    culture: Option<String>,
    format: Format,
) -> Result<(), String> {
    match size {
        Some(0) => return Err("party size must be at least 1".into()),
        Some(n) if n > MAX_PARTY_SIZE => {
            return Err(format!("party size must be at most {MAX_PARTY_SIZE}, got {n}"));
        }
        _ => {}
    }

    let options = GenerateOptions {
        party_size: size,
        cultural_members: cultural,
        culture,
        ..GenerateOptions::default()
    };
    if let Some(name) = &options.culture {
        if ctx.generator.tables().culture(name).is_none() {
            let known: Vec<&str> = ctx
                .generator
                .tables()
                .cultures
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            return Err(format!(
                "unknown culture \"{name}\" (known: {})",
                known.join(", ")
            ));
        }
    }

    let party = ctx.generator.party(&options, &mut ctx.rng);
    super::print_characters(&party, format)
}
