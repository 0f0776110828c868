//! Character assembly for the three generation modes.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pg_core::{Character, Draw, Gender, StatBlock};

use crate::config::{GeneratorConfig, coin};
use crate::error::{GenError, GenResult};
use crate::names::{Culture, UsedVowels};
use crate::oracle::OracleDeck;
use crate::tables::Tables;
use crate::{background, class, feats, stats, traits};

/// Largest cultural member count drawn for a party.
pub const MAX_CULTURAL_MEMBERS: usize = 6;

/// Largest party a caller may force.
pub const MAX_PARTY_SIZE: usize = 12;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// A group of non-player characters.
    Party,
    /// One non-player character with two oracle draws.
    Individual,
    /// One player character with two oracle draws.
    Player,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Party => write!(f, "party"),
            Self::Individual => write!(f, "individual"),
            Self::Player => write!(f, "player"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "party" => Ok(Self::Party),
            "individual" | "npc" => Ok(Self::Individual),
            "player" | "pc" => Ok(Self::Player),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Caller overrides for one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Player mode only: make the character human instead of drawing a species.
    pub force_human: bool,
    /// Party mode only: use this size instead of drawing one. Clamped to
    /// `1..=MAX_PARTY_SIZE`.
    pub party_size: Option<usize>,
    /// Party mode only: use this many cultural members (capped at the size).
    pub cultural_members: Option<usize>,
    /// Party mode only: use the culture with this name.
    pub culture: Option<String>,
}

impl GenerateOptions {
    /// Set the force-human flag.
    pub fn with_force_human(mut self, force: bool) -> Self {
        self.force_human = force;
        self
    }

    /// Force the party size, clamped to `1..=MAX_PARTY_SIZE`.
    pub fn with_party_size(mut self, size: usize) -> Self {
        self.party_size = Some(size.clamp(1, MAX_PARTY_SIZE));
        self
    }

    /// Force the cultural member count.
    pub fn with_cultural_members(mut self, count: usize) -> Self {
        self.cultural_members = Some(count);
        self
    }

    /// Force the shared culture.
    pub fn with_culture(mut self, name: impl Into<String>) -> Self {
        self.culture = Some(name.into());
        self
    }
}

/// How a character gets its name.
enum Naming<'a> {
    Culture(&'a Culture),
    Vowel(&'a mut UsedVowels),
}

/// Power grade and feat rules for one character.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Grade {
    Npc,
    Player { force_human: bool },
}

/// Generates characters from validated tables.
#[derive(Debug, Clone)]
pub struct Generator {
    tables: Tables,
    deck: OracleDeck,
    config: GeneratorConfig,
}

impl Generator {
    /// Build a generator, validating the tables.
    pub fn new(tables: Tables, deck: OracleDeck, config: GeneratorConfig) -> GenResult<Self> {
        tables.validate()?;
        Ok(Self {
            tables,
            deck,
            config,
        })
    }

    /// A generator over the built-in tables and deck.
    pub fn builtin() -> GenResult<Self> {
        Self::new(Tables::builtin()?, OracleDeck::builtin(), GeneratorConfig::default())
    }

    /// The tables in use.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// The deck in use.
    pub fn deck(&self) -> &OracleDeck {
        &self.deck
    }

    /// The probabilities in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the characters for one request.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        mode: GenerationMode,
        options: &GenerateOptions,
        rng: &mut R,
    ) -> Vec<Character> {
        match mode {
            GenerationMode::Party => self.party(options, rng),
            GenerationMode::Individual => vec![self.individual(rng)],
            GenerationMode::Player => vec![self.player(options.force_human, rng)],
        }
    }

    /// Draw one oracle card.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Draw {
        self.deck.draw(rng)
    }

    /// One non-player character with a vowel name and two oracle draws.
    pub fn individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Character {
        let mut used = UsedVowels::new();
        let mut c = self.build(rng, Naming::Vowel(&mut used), Grade::Npc);
        c.draws = vec![self.draw(rng), self.draw(rng)];
        tracing::debug!("generated individual {}", c.name);
        c
    }

    /// One player character with a vowel name and two oracle draws.
    pub fn player<R: Rng + ?Sized>(&self, force_human: bool, rng: &mut R) -> Character {
        let mut used = UsedVowels::new();
        let mut c = self.build(rng, Naming::Vowel(&mut used), Grade::Player { force_human });
        c.draws = vec![self.draw(rng), self.draw(rng)];
        tracing::debug!("generated player {} (force_human: {})", c.name, force_human);
        c
    }

    /// A party of non-player characters.
    ///
    /// Size is the larger of a d4 and a d6. The first members share one
    /// culture's names and the rest take vowel names, avoiding repeated
    /// initial vowels. One random member gets a personal oracle draw, and
    /// the first member carries the party-level draw.
    pub fn party<R: Rng + ?Sized>(&self, options: &GenerateOptions, rng: &mut R) -> Vec<Character> {
        let size = match options.party_size {
            Some(size) => size.clamp(1, MAX_PARTY_SIZE),
            None => rng.random_range(1..=4usize).max(rng.random_range(1..=6usize)),
        };

        let culture = self.party_culture(options, rng);
        let cultural = match culture {
            None => 0,
            Some(_) => options
                .cultural_members
                .unwrap_or_else(|| rng.random_range(0..=MAX_CULTURAL_MEMBERS))
                .min(size),
        };

        let party_draw = self.draw(rng);
        let drawn_member = rng.random_range(0..size);
        tracing::debug!(
            "generating party of {} ({} cultural, draw for member {})",
            size,
            cultural,
            drawn_member
        );

        let mut used = UsedVowels::new();
        let mut party = Vec::with_capacity(size);
        for i in 0..size {
            let naming = match culture {
                Some(c) if i < cultural => Naming::Culture(c),
                _ => Naming::Vowel(&mut used),
            };
            let mut member = self.build(rng, naming, Grade::Npc);
            if i == drawn_member {
                member.draws.push(self.draw(rng));
            }
            party.push(member);
        }
        if let Some(first) = party.first_mut() {
            first.party_draw = Some(party_draw);
        }
        party
    }

    fn party_culture<R: Rng + ?Sized>(
        &self,
        options: &GenerateOptions,
        rng: &mut R,
    ) -> Option<&Culture> {
        if let Some(name) = &options.culture {
            match self.tables.culture(name) {
                Some(c) => return Some(c),
                None => tracing::warn!("unknown culture {}, choosing one at random", name),
            }
        }
        if self.tables.cultures.is_empty() {
            tracing::debug!("no cultures configured, party uses vowel names only");
            return None;
        }
        Some(&self.tables.cultures[rng.random_range(0..self.tables.cultures.len())])
    }

    fn build<R: Rng + ?Sized>(&self, rng: &mut R, naming: Naming<'_>, grade: Grade) -> Character {
        let t = &self.tables;
        let id: Uuid = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
        let gender = if coin(rng, self.config.gender_female_chance) {
            Gender::Female
        } else {
            Gender::Male
        };

        let (name, culture) = match naming {
            Naming::Culture(c) => (
                c.generate(rng, gender, self.config.preset_name_chance),
                Some(c.name.clone()),
            ),
            Naming::Vowel(used) => match t.vowel_names.pick(rng, gender, used) {
                Some((name, vowel)) => {
                    used.mark(vowel);
                    (name, None)
                }
                None => {
                    tracing::warn!("vowel-name table has no {} names", gender);
                    ("Nameless".to_string(), None)
                }
            },
        };

        let level = *t.level_weights.choose(rng);
        let species = match grade {
            Grade::Player { force_human: true } => "Human".to_string(),
            _ => t.species_weights.choose(rng).clone(),
        };
        let is_player = matches!(grade, Grade::Player { .. });
        let is_human = species.eq_ignore_ascii_case("human");

        let stats: StatBlock = if is_player {
            stats::roll_player_grade(rng, t)
        } else {
            stats::roll_baseline(rng, t)
        };
        let class = class::resolve(rng, t, stats.roles.primary);
        let background = background::choose(rng, t, &self.config, &stats.roles);
        let traits = traits::choose(rng, t);
        let feats = feats::choose(
            rng,
            t,
            &self.config,
            stats.roles.primary,
            is_human,
            is_player,
        );

        Character {
            id,
            name,
            gender,
            culture,
            species,
            level,
            stats,
            class,
            background,
            traits,
            feats,
            draws: Vec::new(),
            party_draw: None,
            is_player,
        }
    }
}

impl TryFrom<(Tables, OracleDeck)> for Generator {
    type Error = GenError;

    fn try_from((tables, deck): (Tables, OracleDeck)) -> GenResult<Self> {
        Self::new(tables, deck, GeneratorConfig::default())
    }
}
