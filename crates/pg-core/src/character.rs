use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ability::StatBlock;
use crate::catalog::{Background, ClassInfo, OriginFeat, TraitSet};
use crate::error::CoreError;
use crate::oracle::Draw;

/// Selects which name pool a character is named from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male name pool.
    Male,
    /// Female name pool.
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(CoreError::UnknownGender(s.trim().to_string())),
        }
    }
}

/// A fully generated character.
///
/// Records are built in one pass by the generator and never mutated
/// afterwards. Two records built from the same random stream compare equal,
/// including the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Identifier drawn from the generator's random stream.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Name pool the character was named from.
    pub gender: Gender,
    /// Culture whose generator produced the name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    /// Species, e.g. "Human".
    pub species: String,
    /// Character level.
    pub level: u32,
    /// Scores, roles, and bonuses.
    pub stats: StatBlock,
    /// Class and subclass.
    pub class: ClassInfo,
    /// Background.
    pub background: Background,
    /// Personality traits.
    pub traits: TraitSet,
    /// Origin feats, unique by name.
    #[serde(default)]
    pub feats: Vec<OriginFeat>,
    /// Personal oracle draws.
    #[serde(default)]
    pub draws: Vec<Draw>,
    /// Party-level oracle draw, carried by the first member of a party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_draw: Option<Draw>,
    /// Whether this is a player character.
    #[serde(default)]
    pub is_player: bool,
}

impl Character {
    /// Whether the character has a feat with this name.
    pub fn has_feat(&self, name: &str) -> bool {
        self.feats.iter().any(|f| f.name == name)
    }

    /// Whether the character is human.
    pub fn is_human(&self) -> bool {
        self.species.eq_ignore_ascii_case("human")
    }

    /// One-line summary, e.g. "Alaric, level 3 Human Fighter (Champion)".
    pub fn summary(&self) -> String {
        format!(
            "{}, level {} {} {}",
            self.name, self.level, self.species, self.class
        )
    }
}
