//! Procedural character generation for plebgen.
//!
//! Turns the static [`Tables`] and an [`OracleDeck`] into complete
//! [`pg_core::Character`] records. Every step draws from a caller-supplied
//! random source, so a seeded RNG reproduces a generation exactly:
//!
//! - [`stats`] rolls and adjusts ability scores for the two power grades
//! - [`class`] maps a primary ability to a class and subclass
//! - [`background`], [`traits`] and [`feats`] pick catalog entries
//! - [`names`] holds the cultural and vowel-table name generators
//! - [`oracle`] draws cards from the deck
//! - [`generator`] assembles parties, individuals and players

pub mod background;
pub mod class;
pub mod config;
pub mod error;
pub mod feats;
pub mod generator;
pub mod names;
pub mod oracle;
pub mod stats;
pub mod tables;
pub mod traits;

pub use config::GeneratorConfig;
pub use error::{GenError, GenResult};
pub use generator::{GenerateOptions, GenerationMode, Generator, MAX_PARTY_SIZE};
pub use names::{Culture, UsedVowels, VowelNameTable};
pub use oracle::OracleDeck;
pub use stats::{BonusRule, PrimaryMapping, StatRules};
pub use tables::Tables;
