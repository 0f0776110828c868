//! The oracle card deck.
//!
//! A draw picks a card uniformly, then reads one d10: the roll decides both
//! the orientation (6+ is reversed) and the meaning category (1/6 person,
//! 2/7 creature or trap, 3/8 place, 4/9 treasure, 5/10 situation). The two
//! are deliberately correlated.

pub mod builtin;

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use pg_core::{Draw, MeaningCategory, OracleCard, Orientation};
use pg_mechanics::{Die, choose_uniform};

use crate::error::GenResult;

/// Text used when a meaning set is empty.
pub const UNKNOWN_MEANING: &str = "Unknown meaning";

/// An ordered deck of oracle cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OracleDeck {
    cards: Vec<OracleCard>,
}

impl OracleDeck {
    /// Build a deck from cards.
    pub fn new(cards: Vec<OracleCard>) -> Self {
        Self { cards }
    }

    /// The built-in deck.
    pub fn builtin() -> Self {
        Self::new(builtin::cards())
    }

    /// Parse a `cards.json`-shaped deck.
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a deck file.
    pub fn from_path(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Read a deck file, or fall back to the built-in deck if it is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(deck) => deck,
            Err(e) => {
                tracing::warn!(
                    "could not load oracle deck from {}: {}, using built-in deck",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// The cards in deck order.
    pub fn cards(&self) -> &[OracleCard] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw one card.
    ///
    /// An empty deck yields [`default_draw`].
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Draw {
        let Some(card) = choose_uniform(rng, &self.cards) else {
            tracing::warn!("oracle deck is empty, using default draw");
            return default_draw();
        };
        let roll = Die::D10.roll(rng);
        read_card(card, roll)
    }
}

/// Interpret a card for a given d10 roll.
pub fn read_card(card: &OracleCard, roll: u32) -> Draw {
    let orientation = Orientation::from_d10(roll);
    let category = MeaningCategory::from_d10(roll);
    let meanings = card.meanings(orientation);
    let text = match meanings.get(category) {
        Some(text) => text.to_string(),
        None => match meanings.first() {
            Some((key, text)) => {
                tracing::debug!(
                    "{} has no {} meaning when {}, using {}",
                    card.title,
                    category.key(),
                    orientation,
                    key
                );
                text.to_string()
            }
            None => {
                tracing::warn!("{} has no {} meanings", card.title, orientation);
                UNKNOWN_MEANING.to_string()
            }
        },
    };
    Draw {
        title: card.title.clone(),
        orientation,
        category,
        text,
    }
}

/// The draw returned when there is no deck to draw from.
pub fn default_draw() -> Draw {
    Draw {
        title: "BALANCE".to_string(),
        orientation: Orientation::Upright,
        category: MeaningCategory::Situation,
        text: "A situation where maintaining balance is important.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MinRng;
    use pg_core::MeaningSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn sparse_card() -> OracleCard {
        OracleCard {
            title: "LANTERN".to_string(),
            upright_meaning: MeaningSet::new()
                .with(MeaningCategory::Place, "A lit window.")
                .with(MeaningCategory::Person, "A guide."),
            reversed_meaning: MeaningSet::new(),
        }
    }

    #[test]
    fn read_card_uses_category() {
        let d = read_card(&sparse_card(), 3);
        assert_eq!(d.orientation, Orientation::Upright);
        assert_eq!(d.category, MeaningCategory::Place);
        assert_eq!(d.text, "A lit window.");
    }

    #[test]
    fn missing_category_falls_back_to_first_entry() {
        let d = read_card(&sparse_card(), 4);
        assert_eq!(d.category, MeaningCategory::Treasure);
        assert_eq!(d.text, "A lit window.");
    }

    #[test]
    fn empty_meanings_are_unknown() {
        let d = read_card(&sparse_card(), 9);
        assert_eq!(d.orientation, Orientation::Reversed);
        assert_eq!(d.text, UNKNOWN_MEANING);
    }

    #[test]
    fn empty_deck_gives_default_draw() {
        let deck = OracleDeck::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(deck.draw(&mut rng), default_draw());
    }

    #[test]
    fn min_rng_draws_first_card_upright_person() {
        let deck = OracleDeck::builtin();
        let d = deck.draw(&mut MinRng);
        assert_eq!(d.title, deck.cards()[0].title);
        assert_eq!(d.orientation, Orientation::Upright);
        assert_eq!(d.category, MeaningCategory::Person);
    }

    #[test]
    fn draws_come_from_the_deck() {
        let deck = OracleDeck::builtin();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            let d = deck.draw(&mut rng);
            assert!(deck.cards().iter().any(|c| c.title == d.title));
            assert!(!d.text.is_empty());
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "BALANCE",
                "upright_meaning": {{"person": "A fair-minded person."}},
                "reversed_meaning": {{"situation": "Something over- or undervalued."}}}}]"#
        )
        .unwrap();
        let deck = OracleDeck::from_path(file.path()).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].title, "BALANCE");
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("cards.json");
        assert_eq!(OracleDeck::load_or_default(&missing), OracleDeck::builtin());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not a deck").unwrap();
        assert_eq!(OracleDeck::load_or_default(&bad), OracleDeck::builtin());
        assert!(OracleDeck::from_path(&bad).is_err());
    }
}
