//! Item activation effects.
//!
//! Effects are pure over (actor, world, context): they mutate fighter and
//! AI state and narrate what happened, but never touch the inventory.
//! Whether a charge was spent is reported with [`Effect::Consumed`]; a
//! miss or an invalid target leaves it out so the item is preserved.

use serde::{Deserialize, Serialize};

use crate::action::Effect;
use crate::entity::{Entities, EntityId};
use crate::fov::FovMap;

mod potion;
mod scroll;

/// What activating an item does, with strongly-typed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    Heal { amount: i32 },
    Lightning { damage: i32, maximum_range: i32 },
    Fireball { damage: i32, radius: i32 },
    Confuse { duration: u32 },
}

/// Dispatch an item effect for `actor`.
///
/// `target` carries the coordinates picked in targeting mode; effects that
/// do not need one ignore it.
pub fn invoke(
    effect: ItemEffect,
    actor: EntityId,
    entities: &mut Entities,
    fov: &FovMap,
    target: Option<(i32, i32)>,
) -> Vec<Effect> {
    match effect {
        ItemEffect::Heal { amount } => potion::heal(actor, entities, amount),
        ItemEffect::Lightning {
            damage,
            maximum_range,
        } => scroll::cast_lightning(actor, entities, fov, damage, maximum_range),
        ItemEffect::Fireball { damage, radius } => {
            scroll::cast_fireball(entities, fov, damage, radius, target)
        }
        ItemEffect::Confuse { duration } => scroll::cast_confuse(entities, fov, duration, target),
    }
}
