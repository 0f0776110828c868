//! Core types for plebgen: abilities, characters, catalog entries, and oracle cards.
//!
//! This crate defines the records the generator produces. It holds no
//! randomness and no tables; everything here is plain data that serializes
//! to JSON.

/// The six abilities, ability scores, stat roles, and stat blocks.
pub mod ability;
/// The assembled character record and its identity types.
pub mod character;
/// Static catalog entries: backgrounds, origin feats, class info, traits.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Oracle cards, meaning sets, and draws.
pub mod oracle;

/// Re-export ability types.
pub use ability::{Ability, AbilityScores, StatBlock, StatRole, StatRoles};
/// Re-export catalog types.
pub use catalog::{Background, ClassInfo, ClassType, OriginFeat, Trait, TraitKind, TraitSet};
/// Re-export the character record.
pub use character::{Character, Gender};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export oracle types.
pub use oracle::{Draw, MeaningCategory, MeaningSet, OracleCard, Orientation};
