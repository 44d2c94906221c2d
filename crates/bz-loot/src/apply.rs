//! Applying effects to a hero.

use bz_core::{Hero, collate};

use crate::reward::Effect;

/// Fold an ordered effect list over a hero, returning the updated value.
///
/// Resource deltas add to the counters (saturating, so counters never
/// decrease or wrap); inventory additions append; `NoEffect` is a no-op.
/// The inventory is re-sorted ascending after the fold. The caller replaces
/// the hero in the roster and persists; nothing here touches shared state.
pub fn apply_effects(hero: &Hero, effects: &[Effect]) -> Hero {
    let mut updated = hero.clone();

    for effect in effects {
        match effect {
            Effect::ResourceDelta { exp, gold, glory } => {
                updated.exp = updated.exp.saturating_add(*exp);
                updated.gold = updated.gold.saturating_add(*gold);
                updated.glory = updated.glory.saturating_add(*glory);
            }
            Effect::InventoryAdd { item } => updated.inventory.push(item.clone()),
            Effect::NoEffect => {}
        }
    }

    collate::sort_items(&mut updated.inventory);
    updated
}
