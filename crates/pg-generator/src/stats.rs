//! Ability score generation.
//!
//! Both grades follow the same pipeline: draw a primary ability from the
//! weighted table, look up its fixed secondary and dump abilities, roll all
//! six scores, raise each to its role's floor, then award bonuses. The
//! grades differ only in their [`StatRules`]: baseline characters roll 3d6
//! and get +1 to primary and secondary, player characters roll 4d6 drop
//! lowest, gain a tertiary role and spread three +1s around.

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use pg_core::{Ability, AbilityScores, StatBlock, StatRoles};
use pg_mechanics::roll_best_of;

use crate::error::{GenError, GenResult};
use crate::tables::Tables;

/// The secondary and dump abilities paired with one primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTargets {
    /// Supporting ability.
    pub secondary: Ability,
    /// Neglected ability.
    pub dump: Ability,
}

/// Fixed primary → {secondary, dump} table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimaryMapping(IndexMap<Ability, RoleTargets>);

impl PrimaryMapping {
    /// Build a mapping from `(primary, secondary, dump)` rows.
    pub fn new(rows: impl IntoIterator<Item = (Ability, Ability, Ability)>) -> Self {
        Self(
            rows.into_iter()
                .map(|(primary, secondary, dump)| (primary, RoleTargets { secondary, dump }))
                .collect(),
        )
    }

    /// Targets for a primary ability.
    pub fn get(&self, primary: Ability) -> Option<RoleTargets> {
        self.0.get(&primary).copied()
    }

    /// Rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, RoleTargets)> + '_ {
        self.0.iter().map(|(p, t)| (*p, *t))
    }

    /// Check that every ability is covered and every row names three
    /// different abilities.
    pub fn validate(&self) -> GenResult<()> {
        for primary in Ability::ALL {
            let Some(t) = self.get(primary) else {
                return Err(GenError::InvalidMapping(format!("no entry for {primary}")));
            };
            if t.secondary == primary || t.dump == primary || t.secondary == t.dump {
                return Err(GenError::InvalidMapping(format!(
                    "{primary} → secondary {}, dump {} is not distinct",
                    t.secondary, t.dump
                )));
            }
        }
        Ok(())
    }
}

/// How bonus points are awarded after the floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BonusRule {
    /// Add `amount` to both the primary and the secondary ability.
    PrimarySecondary {
        /// Points added to each of the two.
        amount: u32,
    },
    /// Award `points` single +1s, each to a uniformly chosen ability that
    /// has received fewer than `max_per_ability` so far.
    Spread {
        /// Number of +1s.
        points: u32,
        /// Cap per ability.
        max_per_ability: u32,
    },
}

/// Dice, floors and bonuses for one power grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRules {
    /// Dice rolled per ability.
    pub dice: u32,
    /// Faces per die.
    pub sides: u32,
    /// Highest dice kept per ability.
    pub keep: u32,
    /// Minimum primary score.
    pub primary_floor: u32,
    /// Minimum secondary score.
    pub secondary_floor: u32,
    /// Minimum tertiary score. `None` means the grade has no tertiary role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_floor: Option<u32>,
    /// Minimum dump score.
    pub dump_floor: u32,
    /// Minimum for abilities without a role.
    pub other_floor: u32,
    /// Bonus awarded after the floors.
    pub bonus: BonusRule,
}

impl StatRules {
    /// Non-player rules: 3d6, floors 13/9/3/6, +1 primary and secondary.
    pub fn baseline() -> Self {
        Self {
            dice: 3,
            sides: 6,
            keep: 3,
            primary_floor: 13,
            secondary_floor: 9,
            tertiary_floor: None,
            dump_floor: 3,
            other_floor: 6,
            bonus: BonusRule::PrimarySecondary { amount: 1 },
        }
    }

    /// Player rules: 4d6 drop lowest, floors 15/14/13/3/6, three spread +1s
    /// with at most +2 on one ability.
    pub fn player_grade() -> Self {
        Self {
            dice: 4,
            sides: 6,
            keep: 3,
            primary_floor: 15,
            secondary_floor: 14,
            tertiary_floor: Some(13),
            dump_floor: 3,
            other_floor: 6,
            bonus: BonusRule::Spread {
                points: 3,
                max_per_ability: 2,
            },
        }
    }

    /// Reject dice that cannot be rolled.
    pub fn validate(&self, grade: &'static str) -> GenResult<()> {
        let invalid = |reason: String| GenError::InvalidStatRules { grade, reason };
        if self.dice == 0 {
            return Err(invalid("no dice to roll".to_string()));
        }
        if self.sides < 2 {
            return Err(invalid(format!("a die needs at least 2 sides, got {}", self.sides)));
        }
        if self.keep == 0 || self.keep > self.dice {
            return Err(invalid(format!(
                "cannot keep {} of {} dice",
                self.keep, self.dice
            )));
        }
        Ok(())
    }
}

/// Roll non-player stats with the tables' baseline rules.
pub fn roll_baseline<R: Rng + ?Sized>(rng: &mut R, tables: &Tables) -> StatBlock {
    roll_stats(rng, tables, &tables.baseline_stats)
}

/// Roll player stats with the tables' player-grade rules.
pub fn roll_player_grade<R: Rng + ?Sized>(rng: &mut R, tables: &Tables) -> StatBlock {
    roll_stats(rng, tables, &tables.player_stats)
}

/// Roll a stat block under arbitrary rules.
pub fn roll_stats<R: Rng + ?Sized>(rng: &mut R, tables: &Tables, rules: &StatRules) -> StatBlock {
    let primary = *tables.ability_weights.choose(rng);
    let targets = tables.primary_mapping.get(primary).unwrap_or_else(|| {
        let mut rest = Ability::ALL.into_iter().filter(|a| *a != primary);
        let secondary = rest.next().unwrap_or(primary);
        let dump = rest.next().unwrap_or(primary);
        tracing::warn!(
            "no role mapping for {}, using {} and {}",
            primary,
            secondary,
            dump
        );
        RoleTargets { secondary, dump }
    });

    let rolled =
        AbilityScores::from_fn(|_| roll_best_of(rng, rules.dice, rules.sides, rules.keep));

    let mut roles = StatRoles {
        primary,
        secondary: targets.secondary,
        dump: targets.dump,
        tertiary: None,
    };
    if rules.tertiary_floor.is_some() {
        roles.tertiary = highest_unassigned(&rolled, &roles);
    }

    let mut scores = rolled;
    scores.clamp_min(roles.primary, rules.primary_floor);
    scores.clamp_min(roles.secondary, rules.secondary_floor);
    scores.clamp_min(roles.dump, rules.dump_floor);
    if let (Some(tertiary), Some(floor)) = (roles.tertiary, rules.tertiary_floor) {
        scores.clamp_min(tertiary, floor);
    }
    for ability in roles.unassigned() {
        scores.clamp_min(ability, rules.other_floor);
    }

    let bonuses = award_bonuses(rng, &roles, rules.bonus);
    for ability in &bonuses {
        *scores.get_mut(*ability) += 1;
    }

    StatBlock {
        scores,
        roles,
        bonuses,
    }
}

/// Highest raw roll among abilities without a role; ties go to the first in
/// sheet order.
fn highest_unassigned(rolled: &AbilityScores, roles: &StatRoles) -> Option<Ability> {
    roles
        .unassigned()
        .fold(None, |best: Option<Ability>, a| match best {
            Some(b) if rolled.get(b) >= rolled.get(a) => Some(b),
            _ => Some(a),
        })
}

fn award_bonuses<R: Rng + ?Sized>(
    rng: &mut R,
    roles: &StatRoles,
    rule: BonusRule,
) -> Vec<Ability> {
    match rule {
        BonusRule::PrimarySecondary { amount } => (0..amount)
            .flat_map(|_| [roles.primary, roles.secondary])
            .collect(),
        BonusRule::Spread {
            points,
            max_per_ability,
        } => {
            let cap = max_per_ability as usize;
            let mut awarded: Vec<Ability> = Vec::new();
            for _ in 0..points {
                let open: Vec<Ability> = Ability::ALL
                    .into_iter()
                    .filter(|a| awarded.iter().filter(|b| *b == a).count() < cap)
                    .collect();
                if open.is_empty() {
                    tracing::debug!("every ability is at the bonus cap, dropping remaining points");
                    break;
                }
                awarded.push(open[rng.random_range(0..open.len())]);
            }
            awarded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MinRng;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tables() -> Tables {
        Tables::builtin().unwrap()
    }

    fn check_floors(block: &StatBlock, rules: &StatRules) {
        let s = &block.scores;
        let r = &block.roles;
        let bonus = |a| match rules.bonus {
            BonusRule::PrimarySecondary { amount } => {
                if a == r.primary || a == r.secondary { amount } else { 0 }
            }
            BonusRule::Spread { .. } => 0,
        };
        assert!(s.get(r.primary) >= rules.primary_floor + bonus(r.primary));
        assert!(s.get(r.secondary) >= rules.secondary_floor + bonus(r.secondary));
        assert!(s.get(r.dump) >= rules.dump_floor);
        if let Some(t) = r.tertiary {
            assert!(s.get(t) >= rules.tertiary_floor.unwrap());
        }
        for a in r.unassigned() {
            assert!(s.get(a) >= rules.other_floor);
        }
        assert!(r.is_distinct());
    }

    #[test]
    fn builtin_rules_are_valid() {
        assert!(StatRules::baseline().validate("baseline").is_ok());
        assert!(StatRules::player_grade().validate("player").is_ok());
    }

    #[test]
    fn rules_reject_bad_dice() {
        let mut r = StatRules::baseline();
        r.keep = 4;
        assert!(matches!(
            r.validate("baseline"),
            Err(GenError::InvalidStatRules { grade: "baseline", .. })
        ));
        r.keep = 3;
        r.sides = 1;
        assert!(r.validate("baseline").is_err());
    }

    #[test]
    fn mapping_validation() {
        assert!(tables().primary_mapping.validate().is_ok());

        let partial = PrimaryMapping::new([(Ability::Strength, Ability::Wisdom, Ability::Intelligence)]);
        assert!(matches!(partial.validate(), Err(GenError::InvalidMapping(_))));

        let mut rows: Vec<_> = Ability::ALL
            .into_iter()
            .map(|a| (a, Ability::Wisdom, Ability::Intelligence))
            .collect();
        rows[0] = (Ability::Strength, Ability::Strength, Ability::Intelligence);
        assert!(PrimaryMapping::new(rows).validate().is_err());
    }

    #[test]
    fn baseline_bonus_goes_to_primary_and_secondary() {
        let t = tables();
        let mut rng = StdRng::seed_from_u64(7);
        let block = roll_baseline(&mut rng, &t);
        assert_eq!(block.bonuses, vec![block.roles.primary, block.roles.secondary]);
        assert!(block.roles.tertiary.is_none());
    }

    #[test]
    fn player_has_tertiary_and_three_bonuses() {
        let t = tables();
        let mut rng = StdRng::seed_from_u64(11);
        let block = roll_player_grade(&mut rng, &t);
        let tertiary = block.roles.tertiary.unwrap();
        assert!(block.roles.role_of(tertiary).is_some());
        assert_eq!(block.bonuses.len(), 3);
    }

    #[test]
    fn tertiary_is_highest_unassigned_first_on_ties() {
        let roles = StatRoles {
            primary: Ability::Strength,
            secondary: Ability::Wisdom,
            dump: Ability::Intelligence,
            tertiary: None,
        };
        let mut rolled = AbilityScores::from_fn(|_| 10);
        assert_eq!(highest_unassigned(&rolled, &roles), Some(Ability::Dexterity));
        rolled.set(Ability::Charisma, 12);
        assert_eq!(highest_unassigned(&rolled, &roles), Some(Ability::Charisma));
    }

    #[test]
    fn min_rng_hits_floors_exactly() {
        let t = tables();
        let block = roll_baseline(&mut MinRng, &t);
        // First weighted entry is Strength; mapping gives Wisdom / Intelligence.
        assert_eq!(block.roles.primary, Ability::Strength);
        assert_eq!(block.roles.secondary, Ability::Wisdom);
        assert_eq!(block.roles.dump, Ability::Intelligence);
        assert_eq!(block.scores.strength, 14);
        assert_eq!(block.scores.wisdom, 10);
        assert_eq!(block.scores.intelligence, 3);
        assert_eq!(block.scores.dexterity, 6);
        assert_eq!(block.scores.constitution, 6);
        assert_eq!(block.scores.charisma, 6);
    }

    #[test]
    fn min_rng_player_spread_respects_cap() {
        let t = tables();
        let block = roll_player_grade(&mut MinRng, &t);
        assert_eq!(
            block.bonuses,
            vec![Ability::Strength, Ability::Strength, Ability::Dexterity]
        );
        assert_eq!(block.roles.tertiary, Some(Ability::Dexterity));
        assert_eq!(block.scores.strength, 17);
        assert_eq!(block.scores.dexterity, 14);
    }

    proptest! {
        #[test]
        fn baseline_invariants(seed in any::<u64>()) {
            let t = tables();
            let mut rng = StdRng::seed_from_u64(seed);
            let block = roll_baseline(&mut rng, &t);
            check_floors(&block, &t.baseline_stats);
            prop_assert!(block.scores.get(block.roles.primary) >= 14);
            prop_assert!(block.scores.get(block.roles.secondary) >= 10);
            prop_assert!(block.scores.iter().all(|(_, v)| v >= 3));
        }

        #[test]
        fn player_invariants(seed in any::<u64>()) {
            let t = tables();
            let mut rng = StdRng::seed_from_u64(seed);
            let block = roll_player_grade(&mut rng, &t);
            check_floors(&block, &t.player_stats);
            prop_assert!(block.roles.tertiary.is_some());
            prop_assert_eq!(block.bonuses.len(), 3);
            for a in Ability::ALL {
                prop_assert!(block.bonus_count(a) <= 2);
            }
        }
    }
}
