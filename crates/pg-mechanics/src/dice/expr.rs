//! Dice expressions: `NdS` and `NdSkK`.

use rand::Rng;

use super::Die;
use super::roll::RollResult;
use crate::error::{MechError, MechResult};

/// Most dice one expression may roll.
pub const MAX_DICE: u32 = 1000;

/// Most faces one die in an expression may have.
pub const MAX_SIDES: u32 = 1000;

/// A parsed dice expression such as `3d6` or `4d6k3` (keep highest 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// Die type.
    pub die: Die,
    /// How many of the highest dice count toward the total. `None` keeps all.
    pub keep: Option<u32>,
}

impl DiceExpr {
    /// Parse an expression. A missing count (`d20`) means one die.
    ///
    /// Counts above [`MAX_DICE`] and dice above [`MAX_SIDES`] faces are
    /// rejected.
    pub fn parse(s: &str) -> MechResult<Self> {
        let text = s.trim().to_lowercase();
        let invalid = || MechError::InvalidDice(s.trim().to_string());

        let (count_part, rest) = text.split_once('d').ok_or_else(invalid)?;
        let count = if count_part.is_empty() {
            1
        } else {
            count_part.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 || count > MAX_DICE {
            return Err(invalid());
        }

        let (sides_part, keep) = match rest.split_once('k') {
            Some((sides, keep)) => {
                let keep = keep.parse::<u32>().map_err(|_| invalid())?;
                if keep == 0 || keep > count {
                    return Err(invalid());
                }
                (sides, Some(keep))
            }
            None => (rest, None),
        };
        let sides = sides_part.parse::<u32>().map_err(|_| invalid())?;
        if sides > MAX_SIDES {
            return Err(invalid());
        }
        let die = Die::from_sides(sides).ok_or_else(invalid)?;

        Ok(Self { count, die, keep })
    }

    /// Roll the expression.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let rolled = (0..self.count).map(|_| self.die.roll(rng)).collect();
        RollResult::keeping(rolled, self.keep.map(|k| k as usize))
    }

    /// Smallest possible total.
    pub fn min_total(&self) -> u32 {
        self.keep.unwrap_or(self.count)
    }

    /// Largest possible total.
    pub fn max_total(&self) -> u32 {
        self.keep
            .unwrap_or(self.count)
            .saturating_mul(self.die.sides())
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        if let Some(keep) = self.keep {
            write!(f, "k{keep}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_plain() {
        let e = DiceExpr::parse("3d6").unwrap();
        assert_eq!(e.count, 3);
        assert_eq!(e.die, Die::D6);
        assert_eq!(e.keep, None);
    }

    #[test]
    fn parse_keep_highest() {
        let e = DiceExpr::parse("4D6k3").unwrap();
        assert_eq!(e.count, 4);
        assert_eq!(e.keep, Some(3));
        assert_eq!(e.to_string(), "4d6k3");
    }

    #[test]
    fn parse_implicit_single_die() {
        let e = DiceExpr::parse("d20").unwrap();
        assert_eq!(e.count, 1);
        assert_eq!(e.die, Die::D20);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in [
            "",
            "6",
            "3x6",
            "0d6",
            "3d1",
            "3d6k0",
            "3d6k4",
            "3d6kx",
            "1001d6",
            "2d1001",
            "50000000d100",
        ] {
            assert!(
                matches!(DiceExpr::parse(bad), Err(MechError::InvalidDice(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn largest_expression_stays_in_range() {
        let e = DiceExpr::parse("1000d1000").unwrap();
        assert_eq!(e.max_total(), 1_000_000);
        let mut rng = StdRng::seed_from_u64(8);
        let r = e.roll(&mut rng);
        assert_eq!(r.count(), 1000);
        assert!(r.total() <= e.max_total());
    }

    #[test]
    fn roll_respects_bounds() {
        let e = DiceExpr::parse("4d6k3").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let r = e.roll(&mut rng);
            assert_eq!(r.count(), 3);
            assert_eq!(r.rolled.len(), 4);
            assert!((e.min_total()..=e.max_total()).contains(&r.total()));
        }
    }
}
