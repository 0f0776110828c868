use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a card meaning describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeaningCategory {
    /// Someone the party meets.
    Person,
    /// A monster or a hazard.
    CreatureOrTrap,
    /// A location.
    Place,
    /// Something worth taking.
    Treasure,
    /// A circumstance or turn of events.
    Situation,
}

impl MeaningCategory {
    /// All categories in d10 order (1/6, 2/7, 3/8, 4/9, 5/10).
    pub const ALL: [MeaningCategory; 5] = [
        MeaningCategory::Person,
        MeaningCategory::CreatureOrTrap,
        MeaningCategory::Place,
        MeaningCategory::Treasure,
        MeaningCategory::Situation,
    ];

    /// Category for a d10 roll: 1/6 person, 2/7 creature or trap, 3/8 place,
    /// 4/9 treasure, 5/10 situation.
    pub fn from_d10(roll: u32) -> Self {
        Self::ALL[(roll.saturating_sub(1) % 5) as usize]
    }

    /// Key used in meaning sets, e.g. "creature_or_trap".
    pub fn key(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::CreatureOrTrap => "creature_or_trap",
            Self::Place => "place",
            Self::Treasure => "treasure",
            Self::Situation => "situation",
        }
    }
}

impl std::fmt::Display for MeaningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "Person"),
            Self::CreatureOrTrap => write!(f, "Creature or Trap"),
            Self::Place => write!(f, "Place"),
            Self::Treasure => write!(f, "Treasure"),
            Self::Situation => write!(f, "Situation"),
        }
    }
}

impl FromStr for MeaningCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.key() == norm)
            .ok_or_else(|| CoreError::UnknownCategory(s.trim().to_string()))
    }
}

/// Whether a card was drawn upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Upright meaning applies.
    Upright,
    /// Reversed meaning applies.
    Reversed,
}

impl Orientation {
    /// Orientation for a d10 roll: 6 and above is reversed.
    pub fn from_d10(roll: u32) -> Self {
        if roll > 5 { Self::Reversed } else { Self::Upright }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// Category key → meaning text, in the order the deck defines them.
///
/// Keys are free-form so that a hand-edited deck with an unexpected key
/// still loads; lookups go through [`MeaningSet::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeaningSet(IndexMap<String, String>);

impl MeaningSet {
    /// Create an empty meaning set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, category: MeaningCategory, text: impl Into<String>) -> Self {
        self.0.insert(category.key().to_string(), text.into());
        self
    }

    /// Text for a category, if the set defines it.
    pub fn get(&self, category: MeaningCategory) -> Option<&str> {
        self.0.get(category.key()).map(String::as_str)
    }

    /// The first entry in definition order.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One card of the oracle deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCard {
    /// Card title, e.g. "BALANCE".
    pub title: String,
    /// Meanings when drawn upright.
    #[serde(default)]
    pub upright_meaning: MeaningSet,
    /// Meanings when drawn reversed.
    #[serde(default)]
    pub reversed_meaning: MeaningSet,
}

impl OracleCard {
    /// The meaning set for an orientation.
    pub fn meanings(&self, orientation: Orientation) -> &MeaningSet {
        match orientation {
            Orientation::Upright => &self.upright_meaning,
            Orientation::Reversed => &self.reversed_meaning,
        }
    }
}

/// The outcome of drawing one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Title of the drawn card.
    pub title: String,
    /// Orientation from the d10.
    pub orientation: Orientation,
    /// Category from the same d10.
    pub category: MeaningCategory,
    /// Meaning text.
    pub text: String,
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}): {}",
            self.title, self.orientation, self.category, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_roundtrip_through_parse() {
        for c in MeaningCategory::ALL {
            assert_eq!(c.key().parse::<MeaningCategory>(), Ok(c));
        }
        assert_eq!(
            "Creature or Trap".parse::<MeaningCategory>(),
            Ok(MeaningCategory::CreatureOrTrap)
        );
        assert!("weather".parse::<MeaningCategory>().is_err());
    }

    #[test]
    fn d10_mapping() {
        let expected = [
            (1, Orientation::Upright, MeaningCategory::Person),
            (2, Orientation::Upright, MeaningCategory::CreatureOrTrap),
            (3, Orientation::Upright, MeaningCategory::Place),
            (4, Orientation::Upright, MeaningCategory::Treasure),
            (5, Orientation::Upright, MeaningCategory::Situation),
            (6, Orientation::Reversed, MeaningCategory::Person),
            (7, Orientation::Reversed, MeaningCategory::CreatureOrTrap),
            (8, Orientation::Reversed, MeaningCategory::Place),
            (9, Orientation::Reversed, MeaningCategory::Treasure),
            (10, Orientation::Reversed, MeaningCategory::Situation),
        ];
        for (roll, orientation, category) in expected {
            assert_eq!(Orientation::from_d10(roll), orientation, "roll {roll}");
            assert_eq!(MeaningCategory::from_d10(roll), category, "roll {roll}");
        }
    }

    #[test]
    fn meaning_set_preserves_file_order() {
        let json = r#"{"situation": "S", "person": "P"}"#;
        let set: MeaningSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.first(), Some(("situation", "S")));
        assert_eq!(set.get(MeaningCategory::Person), Some("P"));
        assert_eq!(set.get(MeaningCategory::Place), None);
    }

    #[test]
    fn card_deserializes_cards_json_shape() {
        let json = r#"{
            "title": "BALANCE",
            "upright_meaning": {"person": "A fair-minded person."},
            "reversed_meaning": {"situation": "Something being over- or undervalued."}
        }"#;
        let card: OracleCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "BALANCE");
        assert_eq!(card.meanings(Orientation::Upright).len(), 1);
        assert_eq!(
            card.meanings(Orientation::Reversed)
                .get(MeaningCategory::Situation),
            Some("Something being over- or undervalued.")
        );
    }

    #[test]
    fn draw_display() {
        let draw = Draw {
            title: "BALANCE".to_string(),
            orientation: Orientation::Reversed,
            category: MeaningCategory::CreatureOrTrap,
            text: "A scale that tips.".to_string(),
        };
        assert_eq!(
            draw.to_string(),
            "BALANCE (Reversed, Creature or Trap): A scale that tips."
        );
    }
}
