//! Named probabilities for the generator's coin flips.

use rand::Rng;

/// The probability behind every "either A or B" branch of generation.
///
/// All values are probabilities in `[0, 1]`; the builder methods clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Chance a cultural name is a curated preset instead of syllables.
    pub preset_name_chance: f64,
    /// Chance a background targets the primary ability instead of the secondary.
    pub background_primary_chance: f64,
    /// Chance a feat slot draws from the whole catalog instead of the
    /// primary-ability matches.
    pub feat_any_chance: f64,
    /// Chance of each non-player feat coin flip coming up heads.
    pub npc_feat_chance: f64,
    /// Chance a character is named from the female pools.
    pub gender_female_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            preset_name_chance: 0.5,
            background_primary_chance: 0.75,
            feat_any_chance: 0.5,
            npc_feat_chance: 0.5,
            gender_female_chance: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Set the preset-name chance.
    pub fn with_preset_name_chance(mut self, p: f64) -> Self {
        self.preset_name_chance = probability(p);
        self
    }

    /// Set the background primary-target chance.
    pub fn with_background_primary_chance(mut self, p: f64) -> Self {
        self.background_primary_chance = probability(p);
        self
    }

    /// Set the any-feat chance.
    pub fn with_feat_any_chance(mut self, p: f64) -> Self {
        self.feat_any_chance = probability(p);
        self
    }

    /// Set the non-player feat coin-flip chance.
    pub fn with_npc_feat_chance(mut self, p: f64) -> Self {
        self.npc_feat_chance = probability(p);
        self
    }

    /// Set the female-name chance.
    pub fn with_gender_female_chance(mut self, p: f64) -> Self {
        self.gender_female_chance = probability(p);
        self
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub(crate) fn probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Flip a coin that lands heads with probability `p`.
pub(crate) fn coin<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random_bool(probability(p))
}
