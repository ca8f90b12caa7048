//! Combat stats and damage resolution.

use serde::{Deserialize, Serialize};

use crate::action::Effect;
use crate::data::colors::CLR_WHITE;
use crate::entity::{Entities, EntityId};

/// Combat capability component.
///
/// Invariant: `0 <= hp <= max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub hp: i32,
    pub max_hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        Self {
            hp,
            max_hp: hp,
            defense,
            power,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Subtract hit points, clamped at zero.
    ///
    /// Emits a death marker exactly once, on the hit that crosses zero;
    /// further damage to an already-dead fighter does nothing.
    pub fn take_damage(&mut self, amount: i32, victim: EntityId) -> Vec<Effect> {
        if self.is_dead() {
            return Vec::new();
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.hp = 0;
            vec![Effect::Dead(victim)]
        } else {
            Vec::new()
        }
    }

    /// Restore hit points, clamped at `max_hp`. Callers narrate the heal.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

/// Resolve a melee attack between two registry entities.
///
/// Damage is `max(0, power - defense)`. Either a single hit message
/// followed by the victim's damage effects, or a single no-damage message.
pub fn attack(entities: &mut Entities, attacker: EntityId, defender: EntityId) -> Vec<Effect> {
    let Some(att) = entities.get(attacker) else {
        return Vec::new();
    };
    let Some(def) = entities.get(defender) else {
        return Vec::new();
    };
    let (Some(att_fighter), Some(def_fighter)) = (att.fighter, def.fighter) else {
        return Vec::new();
    };

    let att_name = att.capitalized_name();
    let def_name = def.name.clone();
    let damage = (att_fighter.power - def_fighter.defense).max(0);

    let mut effects = Vec::new();
    if damage > 0 {
        effects.push(Effect::message(
            format!("{att_name} attacks {def_name} for {damage} hit points."),
            CLR_WHITE,
        ));
        if let Some(target) = entities.get_mut(defender) {
            if let Some(fighter) = target.fighter.as_mut() {
                effects.extend(fighter.take_damage(damage, defender));
            }
        }
    } else {
        effects.push(Effect::message(
            format!("{att_name} attacks {def_name} but does no damage."),
            CLR_WHITE,
        ));
    }
    effects
}
