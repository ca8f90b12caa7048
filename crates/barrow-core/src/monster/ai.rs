//! Per-entity decision logic for the enemy turn.

use serde::{Deserialize, Serialize};

use crate::action::Effect;
use crate::combat;
use crate::data::colors::CLR_RED;
use crate::dungeon::GameMap;
use crate::entity::{Entities, EntityId};
use crate::fov::FovMap;
use crate::rng::GameRng;

/// AI behavior component.
///
/// `Confused` wraps the prior behavior together with a remaining-turn
/// counter; the counter strictly decreases on every invocation and the
/// wrapped behavior is restored exactly when it runs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ai {
    /// Walk toward the player when visible, attack when adjacent.
    Basic,
    /// Random walk for `turns` invocations, then revert to `previous`.
    Confused { previous: Box<Ai>, turns: u32 },
}

impl Ai {
    /// Wrap an existing behavior in confusion for a fixed duration.
    pub fn confused(previous: Ai, turns: u32) -> Self {
        Ai::Confused {
            previous: Box::new(previous),
            turns,
        }
    }

    /// Act for one enemy turn.
    pub fn take_turn(
        &mut self,
        me: EntityId,
        player: EntityId,
        entities: &mut Entities,
        fov: &FovMap,
        map: &GameMap,
        rng: &mut GameRng,
    ) -> Vec<Effect> {
        match self {
            Ai::Basic => basic_turn(me, player, entities, fov, map),
            Ai::Confused { previous, turns } => {
                if *turns == 0 {
                    let name = entities
                        .get(me)
                        .map(|e| e.capitalized_name())
                        .unwrap_or_default();
                    let mut effects = vec![Effect::message(
                        format!("The {name} is no longer confused!"),
                        CLR_RED,
                    )];
                    *self = (**previous).clone();
                    effects.extend(self.take_turn(me, player, entities, fov, map, rng));
                    effects
                } else {
                    *turns -= 1;
                    random_walk(me, entities, map, rng);
                    Vec::new()
                }
            }
        }
    }
}

/// Hostile pursuit: idle out of sight, attack when adjacent, otherwise
/// take one deterministic step toward the player.
fn basic_turn(
    me: EntityId,
    player: EntityId,
    entities: &mut Entities,
    fov: &FovMap,
    map: &GameMap,
) -> Vec<Effect> {
    let Some(monster) = entities.get(me) else {
        return Vec::new();
    };
    if !fov.is_visible(monster.x, monster.y) {
        return Vec::new();
    }
    let Some(target) = entities.get(player) else {
        return Vec::new();
    };
    let (px, py) = (target.x, target.y);
    let target_alive = target.fighter.is_some_and(|f| !f.is_dead());

    if monster.is_adjacent(px, py) {
        if target_alive {
            return combat::attack(entities, me, player);
        }
        return Vec::new();
    }

    move_towards(me, px, py, entities, map);
    Vec::new()
}

/// Step so that the straight-line distance to the target strictly shrinks.
///
/// Candidate steps are tried in a fixed order (diagonal first, then the
/// axis with the larger remaining delta), so identical inputs always pick
/// the identical step.
fn move_towards(me: EntityId, tx: i32, ty: i32, entities: &mut Entities, map: &GameMap) {
    let Some(monster) = entities.get(me) else {
        return;
    };
    let (mx, my) = (monster.x, monster.y);
    let dx = (tx - mx).signum();
    let dy = (ty - my).signum();

    let mut candidates = vec![(dx, dy)];
    if (tx - mx).abs() >= (ty - my).abs() {
        candidates.push((dx, 0));
        candidates.push((0, dy));
    } else {
        candidates.push((0, dy));
        candidates.push((dx, 0));
    }

    for (sx, sy) in candidates {
        if sx == 0 && sy == 0 {
            continue;
        }
        let (nx, ny) = (mx + sx, my + sy);
        if !map.is_blocked(nx, ny) && entities.blocking_at(nx, ny).is_none() {
            if let Some(monster) = entities.get_mut(me) {
                monster.move_by(sx, sy);
            }
            return;
        }
    }
}

/// One uniformly random unit step, standing still included, independent
/// of where the player is.
fn random_walk(me: EntityId, entities: &mut Entities, map: &GameMap, rng: &mut GameRng) {
    let dx = rng.between(-1, 1);
    let dy = rng.between(-1, 1);
    if dx == 0 && dy == 0 {
        return;
    }
    let Some(monster) = entities.get(me) else {
        return;
    };
    let (nx, ny) = (monster.x + dx, monster.y + dy);
    if !map.is_blocked(nx, ny) && entities.blocking_at(nx, ny).is_none() {
        if let Some(monster) = entities.get_mut(me) {
            monster.move_by(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{GameMap, Rect};
    use crate::entity::Entity;
    use crate::monster::MonsterKind;

    fn open_map(width: i32, height: i32) -> GameMap {
        let mut map = GameMap::new(width, height);
        map.carve_room(&Rect::new(0, 0, width - 1, height - 1));
        map
    }

    fn setup(player_pos: (i32, i32), monster_pos: (i32, i32)) -> (Entities, EntityId, EntityId, GameMap, FovMap) {
        let mut entities = Entities::new();
        let mut player = Entity::new(player_pos.0, player_pos.1, '@', 15, "player");
        player.blocks = true;
        player.fighter = Some(crate::combat::Fighter::new(30, 2, 5));
        let player_id = entities.spawn(player);
        let monster_id = entities.spawn(MonsterKind::Orc.spawn(monster_pos.0, monster_pos.1));

        let map = open_map(20, 20);
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&map, player_pos.0, player_pos.1, 10);
        (entities, player_id, monster_id, map, fov)
    }

    #[test]
    fn basic_ai_closes_distance_deterministically() {
        let (mut entities, player, monster, map, fov) = setup((5, 5), (9, 5));
        let mut rng = GameRng::new(1);
        let mut ai = Ai::Basic;

        let effects = ai.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
        assert!(effects.is_empty());
        let m = entities.get(monster).unwrap();
        assert_eq!((m.x, m.y), (8, 5));

        // Same setup takes the same step.
        let (mut entities2, player2, monster2, map2, fov2) = setup((5, 5), (9, 5));
        Ai::Basic.take_turn(monster2, player2, &mut entities2, &fov2, &map2, &mut rng);
        let m2 = entities2.get(monster2).unwrap();
        assert_eq!((m2.x, m2.y), (8, 5));
    }

    #[test]
    fn basic_ai_attacks_when_adjacent() {
        let (mut entities, player, monster, map, fov) = setup((5, 5), (6, 5));
        let mut rng = GameRng::new(1);

        let effects = Ai::Basic.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
        assert!(!effects.is_empty());
        // Orc power 3 vs player defense 2: one point of damage.
        assert_eq!(entities.get(player).unwrap().fighter.unwrap().hp, 29);
    }

    #[test]
    fn basic_ai_idles_out_of_sight() {
        let (mut entities, player, monster, map, _) = setup((5, 5), (9, 5));
        let fov = FovMap::new(20, 20); // nothing visible
        let mut rng = GameRng::new(1);

        let effects = Ai::Basic.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
        assert!(effects.is_empty());
        let m = entities.get(monster).unwrap();
        assert_eq!((m.x, m.y), (9, 5));
    }

    #[test]
    fn confusion_lasts_exactly_n_turns() {
        let turns = 4;
        let (mut entities, player, monster, map, fov) = setup((5, 5), (12, 12));
        let mut rng = GameRng::new(99);
        let mut ai = Ai::confused(Ai::Basic, turns);

        for _ in 0..turns {
            let effects = ai.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
            assert!(effects.is_empty());
            assert!(matches!(ai, Ai::Confused { .. }));
        }

        // The (N+1)-th invocation reverts and delegates to the wrapped AI.
        let effects = ai.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
        assert_eq!(ai, Ai::Basic);
        match &effects[0] {
            Effect::Message(m) => assert!(m.text.contains("no longer confused")),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn confused_counter_strictly_decreases() {
        let (mut entities, player, monster, map, fov) = setup((5, 5), (12, 12));
        let mut rng = GameRng::new(7);
        let mut ai = Ai::confused(Ai::Basic, 3);

        for expected in [2u32, 1, 0] {
            ai.take_turn(monster, player, &mut entities, &fov, &map, &mut rng);
            match &ai {
                Ai::Confused { turns, .. } => assert_eq!(*turns, expected),
                other => panic!("reverted early: {other:?}"),
            }
        }
    }
}
