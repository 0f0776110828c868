//! Dice types and rolling.
//!
//! Ability scores are rolled as plain sums (3d6) or keep-highest pools
//! (4d6 drop lowest); the oracle drawer reads a single d10.

pub mod expr;
pub mod roll;

pub use expr::{DiceExpr, MAX_DICE, MAX_SIDES};
pub use roll::RollResult;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One die, by number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Number of faces.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Build a die from a side count, preferring the named variants.
    ///
    /// Returns `None` for fewer than two sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            0 | 1 => None,
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n => Some(Self::Custom(n)),
        }
    }

    /// Roll this die once, returning a value in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides().max(1))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Sum of `n` independent rolls of a die with `sides` faces.
///
/// `roll_sum(rng, 3, 6)` is a classic 3d6 and lands in `3..=18`.
pub fn roll_sum<R: Rng + ?Sized>(rng: &mut R, n: u32, sides: u32) -> u32 {
    let die = die_with(sides);
    (0..n).map(|_| die.roll(rng)).sum()
}

/// Roll `n` dice with `sides` faces and sum the highest `keep` of them.
///
/// `roll_best_of(rng, 4, 6, 3)` is "4d6 drop lowest". Keeping more dice than
/// were rolled keeps them all.
pub fn roll_best_of<R: Rng + ?Sized>(rng: &mut R, n: u32, sides: u32, keep: u32) -> u32 {
    let die = die_with(sides);
    let rolled = (0..n).map(|_| die.roll(rng)).collect();
    RollResult::keeping(rolled, Some(keep as usize)).total()
}

fn die_with(sides: u32) -> Die {
    Die::from_sides(sides).unwrap_or(Die::Custom(sides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn named_and_custom_dice() {
        for (die, sides) in [(Die::D4, 4), (Die::D10, 10), (Die::D100, 100), (Die::Custom(7), 7)] {
            assert_eq!(die.sides(), sides);
            assert_eq!(die.to_string(), format!("d{sides}"));
        }
        assert_eq!(Die::from_sides(6), Some(Die::D6));
        assert_eq!(Die::from_sides(3), Some(Die::Custom(3)));
        assert_eq!(Die::from_sides(1), None);
    }

    #[test]
    fn d10_covers_every_face() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 10];
        for _ in 0..500 {
            seen[(Die::D10.roll(&mut rng) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn best_of_averages_above_plain_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 4000;
        let plain: u32 = (0..trials).map(|_| roll_sum(&mut rng, 3, 6)).sum();
        let best: u32 = (0..trials).map(|_| roll_best_of(&mut rng, 4, 6, 3)).sum();
        assert!(best > plain, "4d6k3 total {best} <= 3d6 total {plain}");
    }

    proptest! {
        #[test]
        fn three_d6_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = roll_sum(&mut rng, 3, 6);
            prop_assert!((3..=18).contains(&v));
        }

        #[test]
        fn four_d6_keep_three_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = roll_best_of(&mut rng, 4, 6, 3);
            prop_assert!((3..=18).contains(&v));
        }
    }
}
