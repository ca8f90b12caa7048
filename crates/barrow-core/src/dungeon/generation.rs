//! Level generation: random rooms joined by straight L-tunnels, populated
//! with monsters and items from fixed probability tables.

use crate::consts::{
    MAP_HEIGHT, MAP_WIDTH, MAX_ITEMS_PER_ROOM, MAX_MONSTERS_PER_ROOM, MAX_ROOMS, ROOM_MAX_SIZE,
    ROOM_MIN_SIZE,
};
use crate::entity::{Entities, EntityId};
use crate::monster::MonsterKind;
use crate::object::ItemKind;
use crate::rng::GameRng;

use super::rect::Rect;
use super::{GameMap, GenerationError};

/// Tunable generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    pub max_rooms: i32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub max_monsters_per_room: i32,
    pub max_items_per_room: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            max_rooms: MAX_ROOMS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            max_monsters_per_room: MAX_MONSTERS_PER_ROOM,
            max_items_per_room: MAX_ITEMS_PER_ROOM,
        }
    }
}

/// Generate a level, placing the player in the first room's center and
/// populating the rest.
///
/// The first room never receives monsters and holds at most one item, so
/// the player always starts somewhere safe.
pub fn make_map(
    config: &MapConfig,
    entities: &mut Entities,
    player: EntityId,
    rng: &mut GameRng,
) -> Result<GameMap, GenerationError> {
    let mut map = GameMap::new(config.width, config.height);
    let mut rooms: Vec<Rect> = Vec::new();

    for _ in 0..config.max_rooms {
        let w = rng.between(config.room_min_size, config.room_max_size);
        let h = rng.between(config.room_min_size, config.room_max_size);
        let x = rng.between(0, config.width - w - 1);
        let y = rng.between(0, config.height - h - 1);

        let new_room = Rect::with_size(x, y, w, h);
        if rooms.iter().any(|other| new_room.intersects(other)) {
            continue;
        }

        map.carve_room(&new_room);
        let (new_x, new_y) = new_room.center();

        if let Some(prev) = rooms.last() {
            // Connect to the previous room with an L-shaped tunnel,
            // horizontal-first on a coin flip.
            let (prev_x, prev_y) = prev.center();
            if rng.coin_flip() {
                map.carve_h_tunnel(prev_x, new_x, prev_y);
                map.carve_v_tunnel(prev_y, new_y, new_x);
            } else {
                map.carve_v_tunnel(prev_y, new_y, prev_x);
                map.carve_h_tunnel(prev_x, new_x, new_y);
            }
            place_entities(
                &new_room,
                entities,
                config.max_monsters_per_room,
                config.max_items_per_room,
                rng,
            );
        } else {
            // First room: the player's starting point, kept safe.
            if let Some(player) = entities.get_mut(player) {
                player.x = new_x;
                player.y = new_y;
            }
            place_entities(&new_room, entities, 0, 1, rng);
        }

        rooms.push(new_room);
    }

    if rooms.is_empty() {
        return Err(GenerationError::NoRooms {
            width: config.width,
            height: config.height,
        });
    }
    Ok(map)
}

/// Populate one room from the spawn tables: 80% of monsters are orcs, the
/// rest trolls; items split 70/10/10/10 across heal/fireball/confuse/
/// lightning. Occupied tiles are never double-booked.
fn place_entities(
    room: &Rect,
    entities: &mut Entities,
    max_monsters: i32,
    max_items: i32,
    rng: &mut GameRng,
) {
    let number_of_monsters = rng.between(0, max_monsters);
    let number_of_items = rng.between(0, max_items);

    for _ in 0..number_of_monsters {
        let x = rng.between(room.x1 + 1, room.x2 - 1);
        let y = rng.between(room.y1 + 1, room.y2 - 1);

        if entities.iter().any(|(_, e)| e.x == x && e.y == y) {
            continue;
        }
        let kind = if rng.percent(80) {
            MonsterKind::Orc
        } else {
            MonsterKind::Troll
        };
        entities.spawn(kind.spawn(x, y));
    }

    for _ in 0..number_of_items {
        let x = rng.between(room.x1 + 1, room.x2 - 1);
        let y = rng.between(room.y1 + 1, room.y2 - 1);

        if entities.iter().any(|(_, e)| e.x == x && e.y == y) {
            continue;
        }
        let chance = rng.rn2(100);
        let kind = if chance < 70 {
            ItemKind::HealingPotion
        } else if chance < 80 {
            ItemKind::FireballScroll
        } else if chance < 90 {
            ItemKind::ConfusionScroll
        } else {
            ItemKind::LightningScroll
        };
        entities.spawn(kind.spawn(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    fn player() -> Entity {
        Entity::new(0, 0, '@', 15, "player")
    }

    fn generate(seed: u64) -> (GameMap, Entities, EntityId) {
        let mut entities = Entities::new();
        let player_id = entities.spawn(player());
        let mut rng = GameRng::new(seed);
        let map = make_map(&MapConfig::default(), &mut entities, player_id, &mut rng)
            .expect("generation");
        (map, entities, player_id)
    }

    #[test]
    fn player_starts_on_open_ground() {
        let (map, entities, player_id) = generate(42);
        let p = entities.get(player_id).unwrap();
        assert!(!map.is_blocked(p.x, p.y));
    }

    #[test]
    fn same_seed_generates_the_same_dungeon() {
        let (map_a, entities_a, _) = generate(7);
        let (map_b, entities_b, _) = generate(7);

        for y in 0..map_a.height {
            for x in 0..map_a.width {
                assert_eq!(map_a.is_blocked(x, y), map_b.is_blocked(x, y));
            }
        }
        let a: Vec<_> = entities_a.iter().map(|(_, e)| (e.name.clone(), e.x, e.y)).collect();
        let b: Vec<_> = entities_b.iter().map(|(_, e)| (e.name.clone(), e.x, e.y)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn no_monsters_near_the_start() {
        // The first room gets no monsters; the player is in the first room,
        // so no monster can share its tile at spawn time.
        let (_, entities, player_id) = generate(1234);
        let p = entities.get(player_id).unwrap();
        let (px, py) = (p.x, p.y);
        for (id, e) in entities.iter() {
            if id != player_id && e.ai.is_some() {
                assert!((e.x, e.y) != (px, py));
            }
        }
    }

    #[test]
    fn spawns_never_share_a_tile() {
        let (_, entities, _) = generate(99);
        let mut seen = std::collections::HashSet::new();
        for (_, e) in entities.iter() {
            assert!(seen.insert((e.x, e.y)), "two spawns at {:?}", (e.x, e.y));
        }
    }

    #[test]
    fn degenerate_map_fails_cleanly() {
        let mut entities = Entities::new();
        let player_id = entities.spawn(player());
        let mut rng = GameRng::new(1);
        let config = MapConfig {
            max_rooms: 0,
            ..MapConfig::default()
        };
        let err = make_map(&config, &mut entities, player_id, &mut rng);
        assert!(matches!(err, Err(GenerationError::NoRooms { .. })));
    }
}
