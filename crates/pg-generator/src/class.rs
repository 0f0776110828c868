//! Class resolution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use pg_core::{Ability, ClassInfo, ClassType};
use pg_mechanics::choose_uniform;

use crate::tables::Tables;

/// Class and subclass names available to one (class type, ability) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Archetype.
    pub class_type: ClassType,
    /// Primary ability the entry serves.
    pub ability: Ability,
    /// Candidate class names.
    pub classes: Vec<String>,
    /// Candidate subclass names, drawn independently of the class.
    pub subclasses: Vec<String>,
}

impl ClassEntry {
    /// Build an entry from string slices.
    pub fn new(
        class_type: ClassType,
        ability: Ability,
        classes: &[&str],
        subclasses: &[&str],
    ) -> Self {
        Self {
            class_type,
            ability,
            classes: classes.iter().map(|s| (*s).to_string()).collect(),
            subclasses: subclasses.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// All class entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCatalog {
    entries: Vec<ClassEntry>,
}

impl ClassCatalog {
    /// Build a catalog.
    pub fn new(entries: Vec<ClassEntry>) -> Self {
        Self { entries }
    }

    /// The entry for a pair, if present with at least one class and one
    /// subclass.
    pub fn lookup(&self, class_type: ClassType, ability: Ability) -> Option<&ClassEntry> {
        self.entries.iter().find(|e| {
            e.class_type == class_type
                && e.ability == ability
                && !e.classes.is_empty()
                && !e.subclasses.is_empty()
        })
    }

    /// All entries.
    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }
}

/// Resolve a class for a primary ability.
///
/// Mental primaries draw a class type from the weighted table; physical
/// primaries are always Blunt. Class and subclass are then picked
/// independently from the matching catalog entry, or the fallback class is
/// used when there is none.
pub fn resolve<R: Rng + ?Sized>(rng: &mut R, tables: &Tables, primary: Ability) -> ClassInfo {
    let class_type = if primary.is_mental() {
        *tables.class_type_weights.choose(rng)
    } else {
        ClassType::Blunt
    };

    let Some(entry) = tables.classes.lookup(class_type, primary) else {
        tracing::warn!("no class data for {} / {}, using fallback", class_type, primary);
        return ClassInfo::fallback();
    };

    match (
        choose_uniform(rng, &entry.classes),
        choose_uniform(rng, &entry.subclasses),
    ) {
        (Some(class_name), Some(subclass)) => ClassInfo {
            class_type,
            class_name: class_name.clone(),
            subclass: subclass.clone(),
        },
        _ => ClassInfo::fallback(),
    }
}
