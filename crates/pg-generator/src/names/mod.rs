//! Name generators.
//!
//! A [`Culture`] either returns one of its curated presets or glues
//! syllables together; the [`VowelNameTable`] hands out names keyed by
//! their initial vowel so that a party rarely has two members starting
//! with the same letter.

pub mod builtin;
pub mod vowel;

pub use vowel::{UsedVowels, VowelNameTable, VowelNames};

use rand::Rng;
use serde::{Deserialize, Serialize};

use pg_core::Gender;
use pg_mechanics::choose_uniform;

use crate::config::coin;
use crate::error::{GenError, GenResult};

/// Inclusive range of syllables in a synthesised name, counting the start
/// and end syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableCount {
    /// Fewest syllables.
    pub min: u32,
    /// Most syllables.
    pub max: u32,
}

impl SyllableCount {
    /// A range of syllable counts.
    pub fn between(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Always exactly `n` syllables.
    pub fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }
}

/// Syllables and presets for one gender of one culture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePools {
    /// Opening syllables.
    #[serde(default)]
    pub start: Vec<String>,
    /// Filler syllables between start and end.
    #[serde(default)]
    pub middle: Vec<String>,
    /// Closing syllables.
    #[serde(default)]
    pub end: Vec<String>,
    /// Curated full names, returned verbatim.
    #[serde(default)]
    pub presets: Vec<String>,
}

impl NamePools {
    fn can_synthesise(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}

/// A cultural name generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Culture {
    /// Culture name, e.g. "Aquilonian".
    pub name: String,
    /// Syllable-count policy for synthesised names.
    pub syllables: SyllableCount,
    /// Pools for male names.
    pub male: NamePools,
    /// Pools for female names.
    pub female: NamePools,
    /// Honorifics that may follow a synthesised name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
    /// Chance a synthesised name gets a title.
    #[serde(default)]
    pub title_chance: f64,
}

impl Culture {
    /// Pools for one gender.
    pub fn pools(&self, gender: Gender) -> &NamePools {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Produce a name: a preset with probability `preset_chance`, otherwise
    /// a synthesised one.
    ///
    /// A pool without presets always synthesises, and a pool that cannot
    /// synthesise always uses a preset.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        gender: Gender,
        preset_chance: f64,
    ) -> String {
        let pools = self.pools(gender);
        let use_preset = coin(rng, preset_chance);
        if use_preset || !pools.can_synthesise() {
            if let Some(name) = choose_uniform(rng, &pools.presets) {
                return name.clone();
            }
        }
        if !pools.can_synthesise() {
            tracing::warn!("culture {} has no {} names", self.name, gender);
            return self.name.clone();
        }
        self.synthesise(rng, pools)
    }

    fn synthesise<R: Rng + ?Sized>(&self, rng: &mut R, pools: &NamePools) -> String {
        let min = self.syllables.min.max(2);
        let count = rng.random_range(min..=self.syllables.max.max(min));

        let mut raw = String::new();
        raw.push_str(choose_uniform(rng, &pools.start).map_or("", String::as_str));
        for _ in 2..count {
            if let Some(mid) = choose_uniform(rng, &pools.middle) {
                raw.push_str(mid);
            }
        }
        raw.push_str(choose_uniform(rng, &pools.end).map_or("", String::as_str));

        let mut name = capitalize(&raw);
        if !self.titles.is_empty() && coin(rng, self.title_chance) {
            if let Some(title) = choose_uniform(rng, &self.titles) {
                name.push(' ');
                name.push_str(title);
            }
        }
        name
    }

    /// Reject a culture that cannot name one of its genders.
    pub fn validate(&self) -> GenResult<()> {
        let invalid = |reason: String| GenError::InvalidCulture {
            name: self.name.clone(),
            reason,
        };
        if self.syllables.min < 2 || self.syllables.min > self.syllables.max {
            return Err(invalid(format!(
                "syllable range {}..={} must start at 2 or more and not be reversed",
                self.syllables.min, self.syllables.max
            )));
        }
        for gender in [Gender::Male, Gender::Female] {
            let pools = self.pools(gender);
            if pools.presets.is_empty() && !pools.can_synthesise() {
                return Err(invalid(format!(
                    "{gender} pools have neither presets nor start and end syllables"
                )));
            }
        }
        Ok(())
    }
}

/// First letter upper case, the rest lower case.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MinRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pools(start: &[&str], middle: &[&str], end: &[&str], presets: &[&str]) -> NamePools {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        NamePools {
            start: owned(start),
            middle: owned(middle),
            end: owned(end),
            presets: owned(presets),
        }
    }

    fn test_culture() -> Culture {
        Culture {
            name: "Testish".to_string(),
            syllables: SyllableCount::between(2, 4),
            male: pools(&["KA"], &["ro"], &["TH"], &["Sir Preset"]),
            female: pools(&["Ma"], &["ri"], &["na"], &["Lady-Preset"]),
            titles: vec!["the Bold".to_string()],
            title_chance: 0.0,
        }
    }

    #[test]
    fn capitalize_normalises_case() {
        assert_eq!(capitalize("kAROTH"), "Karoth");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn presets_returned_verbatim() {
        let c = test_culture();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(c.generate(&mut rng, Gender::Female, 1.0), "Lady-Preset");
        }
    }

    #[test]
    fn synthesised_names_follow_syllable_policy() {
        let c = test_culture();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let name = c.generate(&mut rng, Gender::Male, 0.0);
            assert!(name.starts_with("Ka") && name.ends_with("th"), "{name}");
            let middles = (name.len() - 4) / 2;
            assert!(middles <= 2, "{name}");
        }
    }

    #[test]
    fn min_rng_picks_preset_and_first_entry() {
        let c = test_culture();
        assert_eq!(c.generate(&mut MinRng, Gender::Male, 0.5), "Sir Preset");
        assert_eq!(c.generate(&mut MinRng, Gender::Male, 0.0), "Kath");
    }

    #[test]
    fn titles_follow_chance() {
        let mut c = test_culture();
        c.title_chance = 1.0;
        let mut rng = StdRng::seed_from_u64(3);
        let name = c.generate(&mut rng, Gender::Male, 0.0);
        assert!(name.ends_with(" the Bold"), "{name}");
    }

    #[test]
    fn missing_presets_fall_back_to_synthesis() {
        let mut c = test_culture();
        c.female.presets.clear();
        let mut rng = StdRng::seed_from_u64(4);
        let name = c.generate(&mut rng, Gender::Female, 1.0);
        assert!(name.starts_with("Ma") && name.ends_with("na"), "{name}");
    }

    #[test]
    fn validation() {
        assert!(test_culture().validate().is_ok());

        let mut c = test_culture();
        c.syllables = SyllableCount::exactly(1);
        assert!(c.validate().is_err());

        let mut c = test_culture();
        c.male = NamePools::default();
        assert!(matches!(c.validate(), Err(GenError::InvalidCulture { .. })));
    }
}
