//! Drinkable effects.

use crate::action::Effect;
use crate::data::colors::{CLR_GREEN, CLR_YELLOW};
use crate::entity::{Entities, EntityId};

/// Restore hit points to the drinker. A full-health drinker keeps the
/// potion.
pub fn heal(actor: EntityId, entities: &mut Entities, amount: i32) -> Vec<Effect> {
    let Some(fighter) = entities.get_mut(actor).and_then(|e| e.fighter.as_mut()) else {
        return Vec::new();
    };

    if fighter.hp == fighter.max_hp {
        return vec![Effect::message(
            "You are already at full health",
            CLR_YELLOW,
        )];
    }

    fighter.heal(amount);
    vec![
        Effect::Consumed,
        Effect::message("Your wounds start to feel better!", CLR_GREEN),
    ]
}
