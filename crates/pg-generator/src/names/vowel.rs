//! Names keyed by initial vowel.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use pg_core::Gender;
use pg_mechanics::choose_uniform;

use crate::error::{GenError, GenResult};

/// Names for one initial vowel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelNames {
    /// The shared initial vowel, upper case.
    pub vowel: char,
    /// Male names.
    pub male: Vec<String>,
    /// Female names.
    pub female: Vec<String>,
}

impl VowelNames {
    /// Names for one gender.
    pub fn names(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Vowels already handed out during one party generation.
///
/// Create a fresh set per party; it is never shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedVowels(BTreeSet<char>);

impl UsedVowels {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vowel as used.
    pub fn mark(&mut self, vowel: char) {
        self.0.insert(vowel.to_ascii_uppercase());
    }

    /// Whether a vowel has been used.
    pub fn contains(&self, vowel: char) -> bool {
        self.0.contains(&vowel.to_ascii_uppercase())
    }

    /// Number of distinct vowels used.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no vowel has been used yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The vowel-name table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VowelNameTable {
    entries: Vec<VowelNames>,
}

impl VowelNameTable {
    /// Build a table from per-vowel entries.
    pub fn new(entries: Vec<VowelNames>) -> Self {
        Self { entries }
    }

    /// The entries in table order.
    pub fn entries(&self) -> &[VowelNames] {
        &self.entries
    }

    /// Pick a name, preferring a vowel not yet in `used`.
    ///
    /// When every vowel has been used, any vowel is eligible again. Returns
    /// the name and the vowel it was filed under so the caller can mark it.
    /// `None` only for a table with no names for `gender`.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        gender: Gender,
        used: &UsedVowels,
    ) -> Option<(String, char)> {
        let stocked: Vec<&VowelNames> = self
            .entries
            .iter()
            .filter(|e| !e.names(gender).is_empty())
            .collect();
        let fresh: Vec<&VowelNames> = stocked
            .iter()
            .copied()
            .filter(|e| !used.contains(e.vowel))
            .collect();
        let pool = if fresh.is_empty() {
            tracing::debug!("all {} vowels used, reusing", stocked.len());
            stocked
        } else {
            fresh
        };

        let entry = choose_uniform(rng, &pool)?;
        let name = choose_uniform(rng, entry.names(gender))?;
        Some((name.clone(), entry.vowel))
    }

    /// Require at least one entry, and names of both genders in every entry.
    pub fn validate(&self) -> GenResult<()> {
        if self.entries.is_empty() {
            return Err(GenError::EmptyTable("vowel_names"));
        }
        for entry in &self.entries {
            for gender in [Gender::Male, Gender::Female] {
                if entry.names(gender).is_empty() {
                    return Err(GenError::InvalidVowelNames {
                        vowel: entry.vowel,
                        reason: format!("no {gender} names"),
                    });
                }
            }
        }
        Ok(())
    }
}
