//! Player movement: step, bump-attack, or nothing at all.

use crate::Game;
use crate::action::{Direction, Effect};
use crate::combat;
use crate::gameloop::TurnState;

/// Move the player one step.
///
/// Blocked terrain is a silent no-op that keeps the player's turn. A
/// blocking entity at the destination is attacked instead of displaced.
/// Either a completed step or an attack hands the turn to the enemies.
pub fn do_move(game: &mut Game, dir: Direction) -> Vec<Effect> {
    let (dx, dy) = dir.delta();
    let Some(player) = game.entities.get(game.player) else {
        return Vec::new();
    };
    let (dest_x, dest_y) = (player.x + dx, player.y + dy);

    if game.map.is_blocked(dest_x, dest_y) {
        return Vec::new();
    }

    if let Some(target) = game.entities.blocking_at(dest_x, dest_y) {
        let effects = combat::attack(&mut game.entities, game.player, target);
        game.state = TurnState::EnemyTurn;
        return effects;
    }

    if let Some(player) = game.entities.get_mut(game.player) {
        player.move_by(dx, dy);
    }
    game.recompute_fov();
    game.state = TurnState::EnemyTurn;
    Vec::new()
}
