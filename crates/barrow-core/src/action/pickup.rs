//! Lifting items off the dungeon floor.

use crate::Game;
use crate::action::Effect;
use crate::data::colors::CLR_YELLOW;
use crate::message::Message;

/// Pick up the item at the player's feet.
///
/// The item entity is lifted out of the registry and handed to the
/// inventory; a full pack refuses it and the entity goes back on the
/// floor. An empty floor costs nothing, not even the turn.
pub fn do_pickup(game: &mut Game) -> Vec<Effect> {
    let Some(player) = game.entities.get(game.player) else {
        return Vec::new();
    };
    let (px, py) = (player.x, player.y);

    let Some(item_id) = game.entities.item_at(px, py) else {
        game.log.add(Message::new(
            "There is nothing here to pick up.",
            CLR_YELLOW,
        ));
        return Vec::new();
    };
    let Some(item) = game.entities.remove(item_id) else {
        return Vec::new();
    };

    let added = game.inventory.add_item(item);
    if let Some(rejected) = added.rejected {
        game.entities.spawn(rejected);
    }
    added.effects
}
