//! Capacity-bound item storage and item activation.

use serde::{Deserialize, Serialize};

use crate::action::Effect;
use crate::data::colors::{CLR_BLUE, CLR_YELLOW};
use crate::entity::{Entities, Entity, EntityId};
use crate::fov::FovMap;
use crate::magic;

/// Ordered item storage. Order is pickup order and is what indexed menu
/// selection refers to.
///
/// Invariant: `items.len() <= capacity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    pub items: Vec<Entity>,
}

/// Outcome of stowing an item: a full pack hands the entity back untouched.
#[derive(Debug)]
pub struct AddItem {
    pub effects: Vec<Effect>,
    pub rejected: Option<Entity>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stow an item entity that has been lifted off the map.
    ///
    /// Fails softly when at capacity: nothing is mutated and the item
    /// comes back to the caller for re-placement.
    pub fn add_item(&mut self, item: Entity) -> AddItem {
        if self.is_full() {
            return AddItem {
                effects: vec![Effect::message(
                    "You cannot carry any more, your inventory is full",
                    CLR_YELLOW,
                )],
                rejected: Some(item),
            };
        }
        let effects = vec![
            Effect::message(format!("You pick up the {}!", item.name), CLR_BLUE),
            Effect::ItemAdded,
        ];
        self.items.push(item);
        AddItem {
            effects,
            rejected: None,
        }
    }

    /// Activate the item at `index` with `actor` as the implicit user.
    ///
    /// Items that need a target but were invoked without one answer with a
    /// targeting request and mutate nothing. A `Consumed` effect in the
    /// result removes the item from the pack exactly once.
    pub fn use_item(
        &mut self,
        index: usize,
        actor: EntityId,
        entities: &mut Entities,
        fov: &FovMap,
        target: Option<(i32, i32)>,
    ) -> Vec<Effect> {
        let Some(item_entity) = self.items.get(index) else {
            return Vec::new();
        };
        let Some(item) = item_entity.item.clone() else {
            return Vec::new();
        };

        let Some(effect) = item.effect else {
            return vec![Effect::message(
                format!("The {} cannot be used", item_entity.name),
                CLR_YELLOW,
            )];
        };

        if item.targeting && target.is_none() {
            return vec![Effect::NeedsTargeting(index)];
        }

        let effects = magic::invoke(effect, actor, entities, fov, target);
        if effects.contains(&Effect::Consumed) {
            self.items.remove(index);
        }
        effects
    }

    /// Drop the item at `index` at the owner's feet.
    pub fn drop_item(&mut self, index: usize, x: i32, y: i32) -> Vec<Effect> {
        if index >= self.items.len() {
            return Vec::new();
        }
        let mut item = self.items.remove(index);
        item.x = x;
        item.y = y;
        vec![
            Effect::message(format!("You dropped the {}", item.name), CLR_YELLOW),
            Effect::ItemDropped(Box::new(item)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Fighter;
    use crate::object::ItemKind;

    #[test]
    fn capacity_is_a_hard_ceiling() {
        let mut inv = Inventory::new(2);
        for _ in 0..2 {
            let added = inv.add_item(ItemKind::HealingPotion.spawn(0, 0));
            assert!(added.rejected.is_none());
        }
        assert!(inv.is_full());

        let refused = inv.add_item(ItemKind::HealingPotion.spawn(0, 0));
        assert!(refused.rejected.is_some());
        assert_eq!(inv.len(), 2);
        match &refused.effects[0] {
            Effect::Message(m) => assert!(m.text.contains("inventory is full")),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn add_emits_pickup_message_and_marker() {
        let mut inv = Inventory::new(26);
        let added = inv.add_item(ItemKind::LightningScroll.spawn(0, 0));
        assert_eq!(added.effects.len(), 2);
        match &added.effects[0] {
            Effect::Message(m) => assert_eq!(m.text, "You pick up the Lightning Scroll!"),
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(added.effects[1], Effect::ItemAdded);
    }

    #[test]
    fn heal_at_full_health_preserves_the_potion() {
        let mut entities = Entities::new();
        let mut player = Entity::new(1, 1, '@', 15, "player");
        player.fighter = Some(Fighter::new(30, 2, 5));
        let player_id = entities.spawn(player);

        let mut inv = Inventory::new(26);
        inv.add_item(ItemKind::HealingPotion.spawn(0, 0));

        let fov = FovMap::new(5, 5);
        let effects = inv.use_item(0, player_id, &mut entities, &fov, None);
        assert!(!effects.contains(&Effect::Consumed));
        assert_eq!(inv.len(), 1);

        // Wounded: the potion is spent exactly once.
        entities.get_mut(player_id).unwrap().fighter.as_mut().unwrap().hp = 10;
        let effects = inv.use_item(0, player_id, &mut entities, &fov, None);
        assert!(effects.contains(&Effect::Consumed));
        assert!(inv.is_empty());
        assert_eq!(entities.get(player_id).unwrap().fighter.unwrap().hp, 14);
    }

    #[test]
    fn targeted_item_without_target_requests_targeting() {
        let mut entities = Entities::new();
        let player_id = entities.spawn(Entity::new(1, 1, '@', 15, "player"));

        let mut inv = Inventory::new(26);
        inv.add_item(ItemKind::FireballScroll.spawn(0, 0));

        let fov = FovMap::new(5, 5);
        let effects = inv.use_item(0, player_id, &mut entities, &fov, None);
        assert_eq!(effects, vec![Effect::NeedsTargeting(0)]);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn drop_places_item_at_owner_position() {
        let mut inv = Inventory::new(26);
        inv.add_item(ItemKind::ConfusionScroll.spawn(0, 0));

        let effects = inv.drop_item(0, 7, 9);
        assert!(inv.is_empty());
        match &effects[1] {
            Effect::ItemDropped(item) => assert_eq!((item.x, item.y), (7, 9)),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut inv = Inventory::new(26);
        let mut entities = Entities::new();
        let id = entities.spawn(Entity::new(0, 0, '@', 15, "player"));
        let fov = FovMap::new(3, 3);
        assert!(inv.use_item(5, id, &mut entities, &fov, None).is_empty());
        assert!(inv.drop_item(5, 0, 0).is_empty());
    }
}
