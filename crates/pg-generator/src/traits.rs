//! Personality trait selection.

use rand::Rng;

use pg_core::{TraitKind, TraitSet};
use pg_mechanics::choose_uniform;

use crate::tables::Tables;

/// Fewest traits a character gets.
pub const MIN_TRAITS: usize = 2;
/// Most traits a character gets.
pub const MAX_TRAITS: usize = 4;

/// Draw 2–4 distinct traits with at least one virtue and one vice.
///
/// One virtue and one vice are always taken first; the remaining slots come
/// from both pools combined, skipping names already chosen. If the pools
/// run dry the set is returned short.
pub fn choose<R: Rng + ?Sized>(rng: &mut R, tables: &Tables) -> TraitSet {
    let target = rng.random_range(MIN_TRAITS..=MAX_TRAITS);
    let mut set = TraitSet::new();

    if let Some(v) = choose_uniform(rng, &tables.virtues) {
        set.insert(v.clone(), TraitKind::Virtue);
    }
    if let Some(v) = choose_uniform(rng, &tables.vices) {
        set.insert(v.clone(), TraitKind::Vice);
    }

    while set.len() < target {
        let remaining: Vec<(&String, TraitKind)> = tables
            .virtues
            .iter()
            .map(|t| (t, TraitKind::Virtue))
            .chain(tables.vices.iter().map(|t| (t, TraitKind::Vice)))
            .filter(|(t, _)| !set.contains(t))
            .collect();
        let Some((name, kind)) = choose_uniform(rng, &remaining) else {
            tracing::debug!("trait pool exhausted at {} of {}", set.len(), target);
            break;
        };
        set.insert((*name).clone(), *kind);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MinRng;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn small_pools_stop_early() {
        let mut t = Tables::builtin().unwrap();
        t.virtues = vec!["Kind".to_string()];
        t.vices = vec!["Vain".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let set = choose(&mut rng, &t);
            assert_eq!(set.len(), 2);
        }
    }

    #[test]
    fn min_rng_takes_first_of_each_pool() {
        let t = Tables::builtin().unwrap();
        let set = choose(&mut MinRng, &t);
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec![t.virtues[0].as_str(), t.vices[0].as_str()]);
    }

    proptest! {
        #[test]
        fn trait_invariants(seed in any::<u64>()) {
            let t = Tables::builtin().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let set = choose(&mut rng, &t);
            prop_assert!((MIN_TRAITS..=MAX_TRAITS).contains(&set.len()));
            prop_assert!(set.count_of(TraitKind::Virtue) >= 1);
            prop_assert!(set.count_of(TraitKind::Vice) >= 1);
            let mut names: Vec<_> = set.names().collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), set.len());
        }
    }
}
