//! Randomness primitives for plebgen.
//!
//! Provides polyhedral dice, keep-highest roll results, a small
//! dice-expression parser, uniform choice over slices, and the
//! weighted table sampler that every generator draws from.

pub mod dice;
pub mod error;
pub mod weighted;

pub use dice::{DiceExpr, Die, RollResult, roll_best_of, roll_sum};
pub use error::{MechError, MechResult};
pub use weighted::{WeightedEntry, WeightedTable, choose_uniform};
