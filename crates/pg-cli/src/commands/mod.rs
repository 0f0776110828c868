pub mod draw;
pub mod individual;
pub mod party;
pub mod player;
pub mod roll;
pub mod session;
pub mod tables;

use std::path::Path;

use pg_core::Character;
use pg_generator::{GeneratorConfig, Generator, OracleDeck, Tables};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Format;
use crate::render;

/// Everything a command needs: the generator and its random source.
pub struct Context {
    pub generator: Generator,
    pub rng: StdRng,
}

impl Context {
    /// Build the generator from optional table and deck files.
    ///
    /// A bad tables file is an error. A bad deck falls back to the built-in
    /// cards with a warning.
    pub fn load(tables: Option<&Path>, deck: Option<&Path>, seed: Option<u64>) -> Result<Self, String> {
        let tables = match tables {
            Some(path) => Tables::from_path(path)
                .map_err(|e| format!("failed to load tables from {}: {e}", path.display()))?,
            None => Tables::builtin().map_err(|e| e.to_string())?,
        };
        let deck = match deck {
            Some(path) => OracleDeck::load_or_default(path),
            None => OracleDeck::builtin(),
        };
        let generator = Generator::new(tables, deck, GeneratorConfig::default())
            .map_err(|e| format!("invalid tables: {e}"))?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { generator, rng })
    }
}

/// Print generated characters in the requested format.
fn print_characters(characters: &[Character], format: Format) -> Result<(), String> {
    match format {
        Format::Json => println!("{}", render::to_json(characters)?),
        Format::Text => {
            if let Some(draw) = characters.iter().find_map(|c| c.party_draw.as_ref()) {
                println!("{}", render::party_banner(draw));
                println!();
            }
            for c in characters {
                println!("{}", render::character(c));
            }
        }
    }
    Ok(())
}
