//! The static data every generator draws from.
//!
//! [`Tables::builtin`] is the default data set. A JSON file may replace any
//! subset of it: fields present in the file override the built-in ones,
//! missing fields keep their defaults. Everything is validated before a
//! generator accepts it.

pub mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};

use pg_core::{Ability, Background, ClassType, OriginFeat};
use pg_mechanics::WeightedTable;

use crate::class::ClassCatalog;
use crate::error::{GenError, GenResult};
use crate::names::{Culture, VowelNameTable};
use crate::stats::{PrimaryMapping, StatRules};

/// All generator data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tables {
    /// Relative frequency of each primary ability.
    pub ability_weights: WeightedTable<Ability>,
    /// Relative frequency of each species.
    pub species_weights: WeightedTable<String>,
    /// Relative frequency of each level.
    pub level_weights: WeightedTable<u32>,
    /// Class-type frequencies for mental primaries.
    pub class_type_weights: WeightedTable<ClassType>,
    /// Fixed secondary and dump ability per primary.
    pub primary_mapping: PrimaryMapping,
    /// Class and subclass names per (type, ability).
    pub classes: ClassCatalog,
    /// Background catalog.
    pub backgrounds: Vec<Background>,
    /// Positive traits.
    pub virtues: Vec<String>,
    /// Negative traits.
    pub vices: Vec<String>,
    /// Origin feat catalog.
    pub feats: Vec<OriginFeat>,
    /// Cultural name generators.
    pub cultures: Vec<Culture>,
    /// Names keyed by initial vowel.
    pub vowel_names: VowelNameTable,
    /// Non-player stat rules.
    pub baseline_stats: StatRules,
    /// Player stat rules.
    pub player_stats: StatRules,
}

/// A tables file: any field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    ability_weights: Option<WeightedTable<Ability>>,
    species_weights: Option<WeightedTable<String>>,
    level_weights: Option<WeightedTable<u32>>,
    class_type_weights: Option<WeightedTable<ClassType>>,
    primary_mapping: Option<PrimaryMapping>,
    classes: Option<ClassCatalog>,
    backgrounds: Option<Vec<Background>>,
    virtues: Option<Vec<String>>,
    vices: Option<Vec<String>>,
    feats: Option<Vec<OriginFeat>>,
    cultures: Option<Vec<Culture>>,
    vowel_names: Option<VowelNameTable>,
    baseline_stats: Option<StatRules>,
    player_stats: Option<StatRules>,
}

impl Tables {
    /// The built-in data set.
    pub fn builtin() -> GenResult<Self> {
        builtin::tables()
    }

    /// Parse a tables file and lay it over the built-in data.
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        let file: TablesFile = serde_json::from_str(json)?;
        let mut tables = Self::builtin()?;
        tables.apply(file);
        tables.validate()?;
        Ok(tables)
    }

    /// Read a tables file and lay it over the built-in data.
    pub fn from_path(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn apply(&mut self, file: TablesFile) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut self.ability_weights, file.ability_weights);
        set(&mut self.species_weights, file.species_weights);
        set(&mut self.level_weights, file.level_weights);
        set(&mut self.class_type_weights, file.class_type_weights);
        set(&mut self.primary_mapping, file.primary_mapping);
        set(&mut self.classes, file.classes);
        set(&mut self.backgrounds, file.backgrounds);
        set(&mut self.virtues, file.virtues);
        set(&mut self.vices, file.vices);
        set(&mut self.feats, file.feats);
        set(&mut self.cultures, file.cultures);
        set(&mut self.vowel_names, file.vowel_names);
        set(&mut self.baseline_stats, file.baseline_stats);
        set(&mut self.player_stats, file.player_stats);
    }

    /// Check the invariants generation relies on.
    ///
    /// Weighted tables are already non-empty with positive weights by
    /// construction. Virtues and vices must not share a name. The feat catalog and culture list may be empty: a
    /// character then gets no feats, and parties use vowel names only.
    pub fn validate(&self) -> GenResult<()> {
        self.primary_mapping.validate()?;
        if self.backgrounds.is_empty() {
            return Err(GenError::EmptyTable("backgrounds"));
        }
        if self.virtues.is_empty() {
            return Err(GenError::EmptyTable("virtues"));
        }
        if self.vices.is_empty() {
            return Err(GenError::EmptyTable("vices"));
        }
        if let Some(shared) = self.virtues.iter().find(|v| self.vices.contains(v)) {
            return Err(GenError::AmbiguousTrait(shared.clone()));
        }
        for culture in &self.cultures {
            culture.validate()?;
        }
        self.vowel_names.validate()?;
        self.baseline_stats.validate("baseline")?;
        self.player_stats.validate("player")?;
        Ok(())
    }

    /// Look up a culture by name, ignoring case.
    pub fn culture(&self, name: &str) -> Option<&Culture> {
        self.cultures
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_tables_validate() {
        let t = Tables::builtin().unwrap();
        assert!(t.validate().is_ok());
        assert_eq!(t.cultures.len(), 5);
        assert!((t.ability_weights.total_weight() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let json = r#"{
            "species_weights": [{"value": "Goblin", "weight": 1.0}],
            "virtues": ["Stubborn"]
        }"#;
        let t = Tables::from_json_str(json).unwrap();
        assert_eq!(t.species_weights.len(), 1);
        assert_eq!(t.virtues, vec!["Stubborn".to_string()]);
        let builtin = Tables::builtin().unwrap();
        assert_eq!(t.vices, builtin.vices);
        assert_eq!(t.backgrounds, builtin.backgrounds);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert!(matches!(
            Tables::from_json_str(r#"{"vices": []}"#),
            Err(GenError::EmptyTable("vices"))
        ));
        assert!(matches!(
            Tables::from_json_str(r#"{"level_weights": []}"#),
            Err(GenError::Json(_))
        ));
        assert!(matches!(
            Tables::from_json_str(r#"{"level_weights": [{"value": 1, "weight": 0}]}"#),
            Err(GenError::Json(_))
        ));
        assert!(matches!(
            Tables::from_json_str(r#"{"primary_mapping": {}}"#),
            Err(GenError::InvalidMapping(_))
        ));
        assert!(matches!(
            Tables::from_json_str(r#"{"unknown_table": 1}"#),
            Err(GenError::Json(_))
        ));
    }

    #[test]
    fn trait_pools_must_be_disjoint() {
        let err = Tables::from_json_str(r#"{"virtues": ["Proud"], "vices": ["Proud"]}"#)
            .unwrap_err();
        assert!(matches!(&err, GenError::AmbiguousTrait(name) if name == "Proud"));

        let mut t = Tables::builtin().unwrap();
        let shared = t.vices[0].clone();
        t.virtues.push(shared);
        assert!(matches!(t.validate(), Err(GenError::AmbiguousTrait(_))));
    }

    #[test]
    fn full_dump_reloads_identically() {
        let t = Tables::builtin().unwrap();
        let json = serde_json::to_string_pretty(&t).unwrap();
        let back = Tables::from_json_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"level_weights": [{{"value": 7, "weight": 1}}]}}"#).unwrap();
        let t = Tables::from_path(file.path()).unwrap();
        assert_eq!(t.level_weights.values().copied().collect::<Vec<_>>(), vec![7]);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Tables::from_path(&missing), Err(GenError::Io(_))));
    }

    #[test]
    fn culture_lookup_ignores_case() {
        let t = Tables::builtin().unwrap();
        assert_eq!(t.culture("q'haran").map(|c| c.name.as_str()), Some("Q'haran"));
        assert!(t.culture("Atlantean").is_none());
    }
}
