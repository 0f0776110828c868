//! Origin feat selection.

use rand::Rng;

use pg_core::{Ability, OriginFeat};
use pg_mechanics::choose_uniform;

use crate::config::{GeneratorConfig, coin};
use crate::tables::Tables;

/// How many feat slots a character rolls for.
///
/// Players get two if human, otherwise one. Non-players flip a coin per
/// potential feat: two flips for humans, one for everyone else.
pub fn slot_count<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    is_human: bool,
    is_player: bool,
) -> usize {
    let slots = if is_human { 2 } else { 1 };
    if is_player {
        slots
    } else {
        (0..slots).filter(|_| coin(rng, config.npc_feat_chance)).count()
    }
}

/// Roll a character's origin feats.
///
/// Each slot draws from the whole catalog or from the feats matching the
/// primary ability. A name already held is discarded, not redrawn, so the
/// result can be shorter than the slot count.
pub fn choose<R: Rng + ?Sized>(
    rng: &mut R,
    tables: &Tables,
    config: &GeneratorConfig,
    primary: Ability,
    is_human: bool,
    is_player: bool,
) -> Vec<OriginFeat> {
    let slots = slot_count(rng, config, is_human, is_player);
    let mut feats: Vec<OriginFeat> = Vec::with_capacity(slots);
    for _ in 0..slots {
        let Some(feat) = choose_one(rng, &tables.feats, config, primary) else {
            tracing::debug!("feat catalog is empty");
            break;
        };
        if feats.iter().any(|f| f.name == feat.name) {
            tracing::debug!("discarding repeated feat {}", feat.name);
            continue;
        }
        feats.push(feat.clone());
    }
    feats
}

fn choose_one<'a, R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &'a [OriginFeat],
    config: &GeneratorConfig,
    primary: Ability,
) -> Option<&'a OriginFeat> {
    if coin(rng, config.feat_any_chance) {
        return choose_uniform(rng, catalog);
    }
    let matches: Vec<&OriginFeat> = catalog.iter().filter(|f| f.ability == primary).collect();
    match choose_uniform(rng, &matches) {
        Some(feat) => Some(*feat),
        None => {
            tracing::debug!("no feat matches {}, choosing from all", primary);
            choose_uniform(rng, catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MinRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tables() -> Tables {
        Tables::builtin().unwrap()
    }

    #[test]
    fn player_slot_counts() {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(slot_count(&mut rng, &cfg, true, true), 2);
        assert_eq!(slot_count(&mut rng, &cfg, false, true), 1);
    }

    #[test]
    fn npc_slot_counts_follow_coin_flips() {
        let mut rng = StdRng::seed_from_u64(2);
        let heads = GeneratorConfig::default().with_npc_feat_chance(1.0);
        assert_eq!(slot_count(&mut rng, &heads, true, false), 2);
        assert_eq!(slot_count(&mut rng, &heads, false, false), 1);
        let tails = GeneratorConfig::default().with_npc_feat_chance(0.0);
        assert_eq!(slot_count(&mut rng, &tails, true, false), 0);
        assert_eq!(slot_count(&mut rng, &tails, false, false), 0);

        let cfg = GeneratorConfig::default();
        for _ in 0..100 {
            assert!(slot_count(&mut rng, &cfg, true, false) <= 2);
            assert!(slot_count(&mut rng, &cfg, false, false) <= 1);
        }
    }

    #[test]
    fn matching_feats_when_not_any() {
        let t = tables();
        let cfg = GeneratorConfig::default().with_feat_any_chance(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let feats = choose(&mut rng, &t, &cfg, Ability::Constitution, false, true);
            assert_eq!(feats.len(), 1);
            assert_eq!(feats[0].ability, Ability::Constitution);
        }
    }

    #[test]
    fn duplicates_are_discarded_not_redrawn() {
        let mut t = tables();
        t.feats = vec![OriginFeat::new("Lucky", Ability::Charisma)];
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let feats = choose(&mut rng, &t, &cfg, Ability::Charisma, true, true);
        assert_eq!(feats.len(), 1);
    }

    #[test]
    fn no_match_falls_back_to_catalog() {
        let mut t = tables();
        t.feats = vec![OriginFeat::new("Lucky", Ability::Charisma)];
        let cfg = GeneratorConfig::default().with_feat_any_chance(0.0);
        let feats = choose(&mut MinRng, &t, &cfg, Ability::Strength, false, true);
        assert_eq!(feats, vec![OriginFeat::new("Lucky", Ability::Charisma)]);
    }

    #[test]
    fn empty_catalog_gives_no_feats() {
        let mut t = tables();
        t.feats.clear();
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = GeneratorConfig::default();
        assert!(choose(&mut rng, &t, &cfg, Ability::Wisdom, true, true).is_empty());
    }
}
