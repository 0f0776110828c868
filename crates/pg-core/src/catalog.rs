use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::CoreError;

/// Broad class archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    /// Weapons and grit, no spellcasting.
    Blunt,
    /// Full spellcaster.
    Caster,
    /// Martial class with partial spellcasting.
    #[serde(alias = "Semi Caster", alias = "SemiCaster")]
    Semicaster,
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blunt => write!(f, "Blunt"),
            Self::Caster => write!(f, "Caster"),
            Self::Semicaster => write!(f, "Semicaster"),
        }
    }
}

impl FromStr for ClassType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "blunt" => Ok(Self::Blunt),
            "caster" => Ok(Self::Caster),
            "semicaster" => Ok(Self::Semicaster),
            _ => Err(CoreError::UnknownClassType(s.trim().to_string())),
        }
    }
}

/// A resolved class for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Archetype.
    pub class_type: ClassType,
    /// Class name, e.g. "Fighter".
    pub class_name: String,
    /// Subclass name, e.g. "Champion".
    pub subclass: String,
}

impl ClassInfo {
    /// The class used when no catalog entry covers a character.
    pub fn fallback() -> Self {
        Self {
            class_type: ClassType::Blunt,
            class_name: "Fighter".to_string(),
            subclass: "Champion".to_string(),
        }
    }
}

impl std::fmt::Display for ClassInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.class_name, self.subclass)
    }
}

/// A background catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Background name, e.g. "Acolyte".
    pub name: String,
    /// The ability the background is built around.
    pub primary: Ability,
    /// A second ability the background also suits.
    pub tertiary: Ability,
}

impl Background {
    /// Build a background entry.
    pub fn new(name: impl Into<String>, primary: Ability, tertiary: Ability) -> Self {
        Self {
            name: name.into(),
            primary,
            tertiary,
        }
    }

    /// Whether either affinity names the given ability.
    pub fn suits(&self, ability: Ability) -> bool {
        self.primary == ability || self.tertiary == ability
    }
}

/// An origin feat catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginFeat {
    /// Feat name, e.g. "Lucky".
    pub name: String,
    /// The ability this feat favours.
    #[serde(alias = "primary_stat")]
    pub ability: Ability,
}

impl OriginFeat {
    /// Build a feat entry.
    pub fn new(name: impl Into<String>, ability: Ability) -> Self {
        Self {
            name: name.into(),
            ability,
        }
    }
}

/// Which pool a personality trait came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    /// A positive trait.
    Virtue,
    /// A negative trait.
    Vice,
}

/// One personality trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    /// Trait name, e.g. "Brave".
    pub name: String,
    /// Virtue or vice.
    pub kind: TraitKind,
}

/// A character's personality traits, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSet {
    traits: Vec<Trait>,
}

impl TraitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait unless one with the same name is already present.
    ///
    /// Returns `true` if the trait was added.
    pub fn insert(&mut self, name: impl Into<String>, kind: TraitKind) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.traits.push(Trait { name, kind });
        true
    }

    /// Whether a trait with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.name == name)
    }

    /// All traits in draw order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Trait names in draw order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|t| t.name.as_str())
    }

    /// Number of traits of one kind.
    pub fn count_of(&self, kind: TraitKind) -> usize {
        self.traits.iter().filter(|t| t.kind == kind).count()
    }

    /// Number of traits.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_type_parse() {
        assert_eq!("blunt".parse::<ClassType>(), Ok(ClassType::Blunt));
        assert_eq!("Semi Caster".parse::<ClassType>(), Ok(ClassType::Semicaster));
        assert_eq!("semi-caster".parse::<ClassType>(), Ok(ClassType::Semicaster));
        assert!("wizardly".parse::<ClassType>().is_err());
    }

    #[test]
    fn class_type_serde_alias() {
        let t: ClassType = serde_json::from_str("\"Semi Caster\"").unwrap();
        assert_eq!(t, ClassType::Semicaster);
    }

    #[test]
    fn fallback_class() {
        let c = ClassInfo::fallback();
        assert_eq!(c.class_type, ClassType::Blunt);
        assert_eq!(c.to_string(), "Fighter (Champion)");
    }

    #[test]
    fn background_suits_either_affinity() {
        let bg = Background::new("Acolyte", Ability::Wisdom, Ability::Charisma);
        assert!(bg.suits(Ability::Wisdom));
        assert!(bg.suits(Ability::Charisma));
        assert!(!bg.suits(Ability::Strength));
    }

    #[test]
    fn feat_accepts_primary_stat_alias() {
        let feat: OriginFeat =
            serde_json::from_str(r#"{"name": "Lucky", "primary_stat": "Charisma"}"#).unwrap();
        assert_eq!(feat, OriginFeat::new("Lucky", Ability::Charisma));
    }

    #[test]
    fn trait_set_rejects_duplicates() {
        let mut set = TraitSet::new();
        assert!(set.insert("Brave", TraitKind::Virtue));
        assert!(set.insert("Greedy", TraitKind::Vice));
        assert!(!set.insert("Brave", TraitKind::Virtue));
        assert_eq!(set.len(), 2);
        assert_eq!(set.count_of(TraitKind::Virtue), 1);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["Brave", "Greedy"]);
    }
}
