use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six fixed abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Physical power.
    #[serde(alias = "Strength", alias = "str", alias = "Str")]
    Strength,
    /// Agility and reflexes.
    #[serde(alias = "Dexterity", alias = "dex", alias = "Dex")]
    Dexterity,
    /// Endurance.
    #[serde(alias = "Constitution", alias = "con", alias = "Con")]
    Constitution,
    /// Reasoning and memory.
    #[serde(alias = "Intelligence", alias = "int", alias = "Int")]
    Intelligence,
    /// Perception and insight.
    #[serde(alias = "Wisdom", alias = "wis", alias = "Wis")]
    Wisdom,
    /// Force of personality.
    #[serde(alias = "Charisma", alias = "cha", alias = "Cha")]
    Charisma,
}

impl Ability {
    /// All six abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Full display name, e.g. "Strength".
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter sheet abbreviation, e.g. "STR".
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Intelligence, Wisdom and Charisma. Only these can drive a caster.
    pub fn is_mental(self) -> bool {
        matches!(self, Self::Intelligence | Self::Wisdom | Self::Charisma)
    }

    fn index(self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "constitution" | "con" => Ok(Self::Constitution),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            _ => Err(CoreError::UnknownAbility(s.trim().to_string())),
        }
    }
}

/// Scores for all six abilities. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: u32,
    /// Dexterity score.
    pub dexterity: u32,
    /// Constitution score.
    pub constitution: u32,
    /// Intelligence score.
    pub intelligence: u32,
    /// Wisdom score.
    pub wisdom: u32,
    /// Charisma score.
    pub charisma: u32,
}

impl AbilityScores {
    /// Build scores from a closure evaluated once per ability, in sheet order.
    pub fn from_fn(mut f: impl FnMut(Ability) -> u32) -> Self {
        let mut scores = Self::default();
        for ability in Ability::ALL {
            scores.set(ability, f(ability));
        }
        scores
    }

    /// Score for one ability.
    pub fn get(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Mutable score for one ability.
    pub fn get_mut(&mut self, ability: Ability) -> &mut u32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }

    /// Overwrite the score for one ability.
    pub fn set(&mut self, ability: Ability, value: u32) {
        *self.get_mut(ability) = value;
    }

    /// Raise a score to at least `floor`. Higher scores are left alone.
    pub fn clamp_min(&mut self, ability: Ability, floor: u32) {
        let score = self.get_mut(ability);
        *score = (*score).max(floor);
    }

    /// `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, u32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Sum of all six scores.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }
}

/// The role an ability plays in a character's build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatRole {
    /// The ability the build is centred on.
    Primary,
    /// The supporting ability.
    Secondary,
    /// Best of the unassigned abilities (player grade only).
    Tertiary,
    /// The neglected ability.
    Dump,
}

impl std::fmt::Display for StatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
            Self::Tertiary => write!(f, "tertiary"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

/// Role assignment for a character's abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRoles {
    /// The primary ability.
    pub primary: Ability,
    /// The secondary ability.
    pub secondary: Ability,
    /// The dump ability.
    pub dump: Ability,
    /// The tertiary ability, assigned only for player-grade stats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<Ability>,
}

impl StatRoles {
    /// The role of an ability, or `None` if it is unassigned.
    pub fn role_of(&self, ability: Ability) -> Option<StatRole> {
        if ability == self.primary {
            Some(StatRole::Primary)
        } else if ability == self.secondary {
            Some(StatRole::Secondary)
        } else if Some(ability) == self.tertiary {
            Some(StatRole::Tertiary)
        } else if ability == self.dump {
            Some(StatRole::Dump)
        } else {
            None
        }
    }

    /// Abilities with no role, in sheet order.
    pub fn unassigned(&self) -> impl Iterator<Item = Ability> + '_ {
        Ability::ALL.into_iter().filter(|a| self.role_of(*a).is_none())
    }

    /// True when every assigned role names a different ability.
    pub fn is_distinct(&self) -> bool {
        let mut seen = [false; 6];
        let assigned = [Some(self.primary), Some(self.secondary), Some(self.dump), self.tertiary];
        for ability in assigned.into_iter().flatten() {
            if std::mem::replace(&mut seen[ability.index()], true) {
                return false;
            }
        }
        true
    }
}

/// Final ability scores plus the roles and bonuses that shaped them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Final scores after floors and bonuses.
    pub scores: AbilityScores,
    /// Role assignment.
    pub roles: StatRoles,
    /// Each +1 bonus awarded after the floors, in award order.
    pub bonuses: Vec<Ability>,
}

impl StatBlock {
    /// Number of +1 bonuses a given ability received.
    pub fn bonus_count(&self, ability: Ability) -> usize {
        self.bonuses.iter().filter(|a| **a == ability).count()
    }
}
