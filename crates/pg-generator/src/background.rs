//! Background selection.

use rand::Rng;

use pg_core::{Ability, Background, StatRoles};
use pg_mechanics::choose_uniform;

use crate::config::{GeneratorConfig, coin};
use crate::tables::Tables;

/// Pick a background suited to the primary ability (or, less often, the
/// secondary).
///
/// Matching entries are those whose primary or tertiary affinity names the
/// target ability. With no match the whole catalog is eligible.
pub fn choose<R: Rng + ?Sized>(
    rng: &mut R,
    tables: &Tables,
    config: &GeneratorConfig,
    roles: &StatRoles,
) -> Background {
    let target = if coin(rng, config.background_primary_chance) {
        roles.primary
    } else {
        roles.secondary
    };
    choose_for(rng, &tables.backgrounds, target)
}

/// Pick a background matching `target`, falling back to the full catalog.
pub fn choose_for<R: Rng + ?Sized>(
    rng: &mut R,
    backgrounds: &[Background],
    target: Ability,
) -> Background {
    let matches: Vec<&Background> = backgrounds.iter().filter(|b| b.suits(target)).collect();
    if let Some(bg) = choose_uniform(rng, &matches) {
        return (*bg).clone();
    }
    tracing::debug!("no background suits {}, choosing from all", target);
    choose_uniform(rng, backgrounds)
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!("background catalog is empty");
            Background::new("Commoner", target, target)
        })
}
