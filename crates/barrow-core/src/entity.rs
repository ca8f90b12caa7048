//! Entities and the entity registry.
//!
//! Every game object - the player, monsters, items, corpses - is an
//! [`Entity`]: a position, a glyph, and a set of optional capability
//! components. Entities are owned by the [`Entities`] registry, a slot
//! arena whose ids stay stable across removals so that a monster dying
//! in the middle of the enemy turn never perturbs the iteration.

use serde::{Deserialize, Serialize};

use crate::combat::Fighter;
use crate::monster::Ai;
use crate::object::Item;

/// Unique identifier for registry entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Draw layering: corpses under items under actors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum RenderOrder {
    Corpse,
    Item,
    #[default]
    Actor,
}

/// A generic game object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: u8,
    pub name: String,
    pub blocks: bool,
    pub render_order: RenderOrder,
    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    pub fn new(x: i32, y: i32, glyph: char, color: u8, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            glyph,
            color,
            name: name.into(),
            blocks: false,
            render_order: RenderOrder::Actor,
            fighter: None,
            ai: None,
            item: None,
        }
    }

    /// Straight-line distance to another entity.
    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.distance(other.x, other.y)
    }

    /// Straight-line distance to a point.
    pub fn distance(&self, x: i32, y: i32) -> f64 {
        let dx = (x - self.x) as f64;
        let dy = (y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev adjacency: true when the other point is at most one step away.
    pub fn is_adjacent(&self, x: i32, y: i32) -> bool {
        (x - self.x).abs() <= 1 && (y - self.y).abs() <= 1
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Display name with the first letter capitalized.
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Slot-arena registry of all live entities.
///
/// Removal clears a slot without shifting the rest, so ids handed out
/// earlier remain valid and iteration order is id order. That order is
/// part of the observable contract: it decides which monster acts first
/// in the enemy turn and who wins exact-distance ties for lightning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entities {
    slots: Vec<Option<Entity>>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, returning its id. Freed slots are reused.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(entity);
                return EntityId(i as u32);
            }
        }
        self.slots.push(Some(entity));
        EntityId(self.slots.len() as u32 - 1)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Remove an entity, leaving its slot empty.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.slots.get_mut(id.0 as usize).and_then(Option::take)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live ids in id order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| EntityId(i as u32))
    }

    /// Live entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (EntityId(i as u32), e)))
    }

    /// The blocking entity at a position, if any.
    pub fn blocking_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.iter()
            .find(|(_, e)| e.blocks && e.x == x && e.y == y)
            .map(|(id, _)| id)
    }

    /// The first item entity lying at a position, if any.
    pub fn item_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.iter()
            .find(|(_, e)| e.item.is_some() && e.x == x && e.y == y)
            .map(|(id, _)| id)
    }

    /// The first entity with an AI at exactly this position, if any.
    pub fn ai_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.iter()
            .find(|(_, e)| e.ai.is_some() && e.x == x && e.y == y)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy(x: i32, y: i32) -> Entity {
        Entity::new(x, y, 'x', 0, "dummy")
    }

    #[test]
    fn ids_stay_stable_across_removal() {
        let mut entities = Entities::new();
        let a = entities.spawn(dummy(0, 0));
        let b = entities.spawn(dummy(1, 0));
        let c = entities.spawn(dummy(2, 0));

        entities.remove(b);
        assert!(entities.get(b).is_none());
        assert_eq!(entities.get(a).unwrap().x, 0);
        assert_eq!(entities.get(c).unwrap().x, 2);

        // Freed slot is reused, ids after it untouched.
        let d = entities.spawn(dummy(3, 0));
        assert_eq!(d, b);
    }

    #[test]
    fn iteration_order_is_id_order() {
        let mut entities = Entities::new();
        entities.spawn(dummy(0, 0));
        entities.spawn(dummy(1, 0));
        entities.spawn(dummy(2, 0));
        let xs: Vec<i32> = entities.iter().map(|(_, e)| e.x).collect();
        assert_eq!(xs, [0, 1, 2]);
    }

    #[test]
    fn blocking_query_ignores_non_blockers() {
        let mut entities = Entities::new();
        entities.spawn(dummy(5, 5));
        let mut blocker = dummy(5, 5);
        blocker.blocks = true;
        let id = entities.spawn(blocker);
        assert_eq!(entities.blocking_at(5, 5), Some(id));
        assert_eq!(entities.blocking_at(4, 5), None);
    }

    #[test]
    fn capitalized_name() {
        let e = Entity::new(0, 0, 'o', 0, "orc");
        assert_eq!(e.capitalized_name(), "Orc");
    }
}
