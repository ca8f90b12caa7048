//! Scroll effects: lightning, fireball, confusion.

use crate::action::Effect;
use crate::data::colors::{CLR_BRIGHT_GREEN, CLR_ORANGE, CLR_RED, CLR_YELLOW};
use crate::entity::{Entities, EntityId};
use crate::fov::FovMap;
use crate::monster::Ai;

/// Strike the nearest visible fighter other than the caster.
///
/// Ties on exact distance go to the lower entity id: the comparison is a
/// strict `<` against the best distance seen so far.
pub fn cast_lightning(
    actor: EntityId,
    entities: &mut Entities,
    fov: &FovMap,
    damage: i32,
    maximum_range: i32,
) -> Vec<Effect> {
    let Some(caster) = entities.get(actor) else {
        return Vec::new();
    };

    let mut target: Option<EntityId> = None;
    let mut closest = (maximum_range + 1) as f64;
    for (id, entity) in entities.iter() {
        if id == actor || entity.fighter.is_none() {
            continue;
        }
        if !fov.is_visible(entity.x, entity.y) {
            continue;
        }
        let distance = caster.distance_to(entity);
        if distance < closest {
            target = Some(id);
            closest = distance;
        }
    }

    let Some(target) = target else {
        return vec![Effect::message("No enemy is close enough to strike.", CLR_RED)];
    };

    let name = entities.get(target).map(|e| e.name.clone()).unwrap_or_default();
    let mut effects = vec![
        Effect::Consumed,
        Effect::message(
            format!(
                "A lightning bolt strikes the {name} with a loud thunder! The damage is {damage}"
            ),
            CLR_YELLOW,
        ),
    ];
    if let Some(fighter) = entities.get_mut(target).and_then(|e| e.fighter.as_mut()) {
        effects.extend(fighter.take_damage(damage, target));
    }
    effects
}

/// Burn every fighter within `radius` of the target point, caster included.
///
/// The target tile must be visible; once it is, the scroll is spent even
/// when the blast hits nothing.
pub fn cast_fireball(
    entities: &mut Entities,
    fov: &FovMap,
    damage: i32,
    radius: i32,
    target: Option<(i32, i32)>,
) -> Vec<Effect> {
    let Some((tx, ty)) = target else {
        return Vec::new();
    };
    if !fov.is_visible(tx, ty) {
        return vec![Effect::message(
            "You cannot target a tile outside your field of view.",
            CLR_YELLOW,
        )];
    }

    let mut effects = vec![
        Effect::Consumed,
        Effect::message(
            format!("The fireball explodes, burning everything within {radius} tiles!"),
            CLR_ORANGE,
        ),
    ];

    let burned: Vec<EntityId> = entities
        .iter()
        .filter(|(_, e)| e.fighter.is_some() && e.distance(tx, ty) <= radius as f64)
        .map(|(id, _)| id)
        .collect();

    for id in burned {
        let name = entities.get(id).map(|e| e.name.clone()).unwrap_or_default();
        effects.push(Effect::message(
            format!("The {name} gets burned for {damage} hit points."),
            CLR_ORANGE,
        ));
        if let Some(fighter) = entities.get_mut(id).and_then(|e| e.fighter.as_mut()) {
            effects.extend(fighter.take_damage(damage, id));
        }
    }
    effects
}

/// Replace the AI of the entity at the target tile with a confused walk
/// for `duration` turns.
pub fn cast_confuse(
    entities: &mut Entities,
    fov: &FovMap,
    duration: u32,
    target: Option<(i32, i32)>,
) -> Vec<Effect> {
    let Some((tx, ty)) = target else {
        return Vec::new();
    };
    if !fov.is_visible(tx, ty) {
        return vec![Effect::message(
            "You cannot target a tile outside your field of view.",
            CLR_YELLOW,
        )];
    }

    let Some(victim) = entities.ai_at(tx, ty) else {
        return vec![Effect::message(
            "There is no targetable enemy at that location.",
            CLR_YELLOW,
        )];
    };

    let name = entities.get(victim).map(|e| e.name.clone()).unwrap_or_default();
    if let Some(entity) = entities.get_mut(victim) {
        if let Some(previous) = entity.ai.take() {
            entity.ai = Some(Ai::confused(previous, duration));
        }
    }
    vec![
        Effect::Consumed,
        Effect::message(
            format!("The eyes of the {name} look vacant, as he starts to stumble around!"),
            CLR_BRIGHT_GREEN,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Fighter;
    use crate::dungeon::{GameMap, Rect};
    use crate::entity::Entity;
    use crate::monster::MonsterKind;

    fn visible_world() -> (Entities, EntityId, FovMap) {
        let mut entities = Entities::new();
        let mut player = Entity::new(5, 5, '@', 15, "player");
        player.fighter = Some(Fighter::new(30, 2, 5));
        let player_id = entities.spawn(player);

        let mut map = GameMap::new(20, 20);
        map.carve_room(&Rect::new(0, 0, 19, 19));
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&map, 5, 5, 10);
        (entities, player_id, fov)
    }

    #[test]
    fn lightning_picks_the_nearest_fighter() {
        let (mut entities, player, fov) = visible_world();
        let near = entities.spawn(MonsterKind::Orc.spawn(7, 5));
        let _far = entities.spawn(MonsterKind::Orc.spawn(9, 5));

        let effects = cast_lightning(player, &mut entities, &fov, 20, 5);
        assert!(effects.contains(&Effect::Consumed));
        // 20 damage kills the 10 hp orc outright.
        assert!(effects.contains(&Effect::Dead(near)));
    }

    #[test]
    fn lightning_breaks_exact_ties_by_id_order() {
        let (mut entities, player, fov) = visible_world();
        let west = entities.spawn(MonsterKind::Orc.spawn(3, 5));
        let east = entities.spawn(MonsterKind::Orc.spawn(7, 5));

        let effects = cast_lightning(player, &mut entities, &fov, 20, 5);
        assert!(effects.contains(&Effect::Dead(west)));
        assert!(!effects.contains(&Effect::Dead(east)));
    }

    #[test]
    fn lightning_out_of_range_is_not_consumed() {
        let (mut entities, player, fov) = visible_world();
        entities.spawn(MonsterKind::Orc.spawn(15, 5));

        let effects = cast_lightning(player, &mut entities, &fov, 20, 5);
        assert!(!effects.contains(&Effect::Consumed));
    }

    #[test]
    fn fireball_burns_the_caster_too() {
        let (mut entities, player, fov) = visible_world();
        let orc = entities.spawn(MonsterKind::Orc.spawn(6, 5));

        let effects = cast_fireball(&mut entities, &fov, 12, 3, Some((5, 5)));
        assert!(effects.contains(&Effect::Consumed));
        assert!(effects.contains(&Effect::Dead(orc)));
        assert_eq!(entities.get(player).unwrap().fighter.unwrap().hp, 18);
    }

    #[test]
    fn fireball_outside_fov_is_refused() {
        let (mut entities, _player, fov) = visible_world();
        let effects = cast_fireball(&mut entities, &fov, 12, 3, Some((19, 19)));
        assert!(!effects.contains(&Effect::Consumed));
    }

    #[test]
    fn fireball_on_empty_ground_is_still_spent() {
        let (mut entities, player, fov) = visible_world();
        // Move the caster out of his own blast radius.
        entities.get_mut(player).unwrap().x = 1;
        entities.get_mut(player).unwrap().y = 1;

        let effects = cast_fireball(&mut entities, &fov, 12, 3, Some((9, 9)));
        assert!(effects.contains(&Effect::Consumed));
        assert!(!effects.iter().any(|e| matches!(e, Effect::Dead(_))));
    }

    #[test]
    fn confuse_wraps_and_misses() {
        let (mut entities, _player, fov) = visible_world();
        let orc = entities.spawn(MonsterKind::Orc.spawn(7, 5));

        let effects = cast_confuse(&mut entities, &fov, 10, Some((7, 5)));
        assert!(effects.contains(&Effect::Consumed));
        match entities.get(orc).unwrap().ai.as_ref().unwrap() {
            Ai::Confused { turns, previous } => {
                assert_eq!(*turns, 10);
                assert_eq!(**previous, Ai::Basic);
            }
            other => panic!("ai not wrapped: {other:?}"),
        }

        // Nothing at the tile: scroll preserved.
        let effects = cast_confuse(&mut entities, &fov, 10, Some((9, 9)));
        assert!(!effects.contains(&Effect::Consumed));
    }
}
