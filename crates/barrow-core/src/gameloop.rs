//! The turn coordinator.
//!
//! [`Game`] owns the whole world state and advances it one [`Command`] at
//! a time: the command is dispatched according to the current
//! [`TurnState`], the resulting effects are interpreted strictly in
//! emission order, and when the player's turn is spent every AI-bearing
//! entity acts in registry id order.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::action::{movement, pickup, Command, Effect};
use crate::combat::Fighter;
use crate::consts::{
    FOV_RADIUS, INVENTORY_CAPACITY, MESSAGE_WINDOW, PLAYER_DEFENSE, PLAYER_HP, PLAYER_POWER,
};
use crate::data::colors::{CLR_CYAN, CLR_ORANGE, CLR_RED, CLR_WHITE};
use crate::dungeon::{make_map, GameMap, GenerationError, MapConfig};
use crate::entity::{Entities, Entity, EntityId, RenderOrder};
use crate::fov::FovMap;
use crate::message::{Message, MessageLog};
use crate::object::Inventory;
use crate::rng::GameRng;

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the player to act.
    #[default]
    PlayersTurn,
    /// The player acted; monsters get to move.
    EnemyTurn,
    /// Terminal: only menus and quitting still work.
    PlayerDead,
    /// The use-item menu is open.
    ShowInventory,
    /// The drop-item menu is open.
    DropInventory,
    /// A targeted item is waiting for coordinates.
    Targeting,
    /// The character sheet is open.
    CharacterScreen,
}

/// Whether the session continues after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// The complete game world plus turn bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub entities: Entities,
    pub player: EntityId,
    pub inventory: Inventory,
    pub map: GameMap,
    pub fov: FovMap,
    pub log: MessageLog,
    pub rng: GameRng,
    pub state: TurnState,
    pub previous_state: TurnState,
    pub targeting_item: Option<usize>,
}

fn new_player() -> Entity {
    let mut player = Entity::new(0, 0, '@', CLR_WHITE, "player");
    player.blocks = true;
    player.fighter = Some(Fighter::new(PLAYER_HP, PLAYER_DEFENSE, PLAYER_POWER));
    player
}

impl Game {
    /// Generate a fresh dungeon and drop the player into its first room.
    pub fn new(config: &MapConfig, seed: u64) -> Result<Self, GenerationError> {
        let mut rng = GameRng::new(seed);
        let mut entities = Entities::new();
        let player = entities.spawn(new_player());
        let map = make_map(config, &mut entities, player, &mut rng)?;

        let mut log = MessageLog::new(MESSAGE_WINDOW);
        log.add(Message::new(
            "Hello and welcome, adventurer, to yet another dungeon!",
            CLR_CYAN,
        ));

        let mut game = Self {
            entities,
            player,
            inventory: Inventory::new(INVENTORY_CAPACITY),
            fov: FovMap::new(map.width, map.height),
            map,
            log,
            rng,
            state: TurnState::PlayersTurn,
            previous_state: TurnState::PlayersTurn,
            targeting_item: None,
        };
        game.recompute_fov();
        Ok(game)
    }

    /// Build a game over an existing map, placing the player explicitly.
    /// Nothing else is spawned; meant for scripted scenarios and tests.
    pub fn with_map(map: GameMap, player_x: i32, player_y: i32, seed: u64) -> Self {
        let mut entities = Entities::new();
        let mut player_entity = new_player();
        player_entity.x = player_x;
        player_entity.y = player_y;
        let player = entities.spawn(player_entity);

        let mut game = Self {
            entities,
            player,
            inventory: Inventory::new(INVENTORY_CAPACITY),
            fov: FovMap::new(map.width, map.height),
            map,
            log: MessageLog::new(MESSAGE_WINDOW),
            rng: GameRng::new(seed),
            state: TurnState::PlayersTurn,
            previous_state: TurnState::PlayersTurn,
            targeting_item: None,
        };
        game.recompute_fov();
        game
    }

    /// The player's current position.
    pub fn player_position(&self) -> (i32, i32) {
        self.entities
            .get(self.player)
            .map(|p| (p.x, p.y))
            .unwrap_or((0, 0))
    }

    /// The player's fighter stats, for status rendering.
    pub fn player_fighter(&self) -> Option<Fighter> {
        self.entities.get(self.player).and_then(|p| p.fighter)
    }

    /// Recompute the field of view around the player and mark every
    /// visible tile as explored.
    pub fn recompute_fov(&mut self) {
        let (px, py) = self.player_position();
        self.fov.recompute(&self.map, px, py, FOV_RADIUS);
        let visible: Vec<(i32, i32)> = self.fov.visible_positions().collect();
        for (x, y) in visible {
            self.map.mark_explored(x, y);
        }
    }

    /// Advance the world by one command.
    ///
    /// Commands that do not fit the current state are ignored. Effects
    /// from the player's action are interpreted in emission order, and if
    /// the turn passed to the enemies they all act before this returns.
    pub fn tick(&mut self, command: Command) -> TickOutcome {
        let mut effects = Vec::new();

        match command {
            Command::Move(dir) if self.state == TurnState::PlayersTurn => {
                effects = movement::do_move(self, dir);
            }
            Command::Wait if self.state == TurnState::PlayersTurn => {
                self.state = TurnState::EnemyTurn;
            }
            Command::Pickup if self.state == TurnState::PlayersTurn => {
                effects = pickup::do_pickup(self);
            }
            Command::ShowInventory
                if matches!(
                    self.state,
                    TurnState::PlayersTurn | TurnState::PlayerDead
                ) =>
            {
                self.previous_state = self.state;
                self.state = TurnState::ShowInventory;
            }
            Command::DropInventory
                if matches!(
                    self.state,
                    TurnState::PlayersTurn | TurnState::PlayerDead
                ) =>
            {
                self.previous_state = self.state;
                self.state = TurnState::DropInventory;
            }
            Command::ShowCharacter
                if matches!(
                    self.state,
                    TurnState::PlayersTurn | TurnState::PlayerDead
                ) =>
            {
                self.previous_state = self.state;
                self.state = TurnState::CharacterScreen;
            }
            Command::SelectItem(index) => {
                // Dead players may browse their pack but not act from it.
                if self.previous_state != TurnState::PlayerDead
                    && index < self.inventory.len()
                {
                    match self.state {
                        TurnState::ShowInventory => {
                            effects = self.inventory.use_item(
                                index,
                                self.player,
                                &mut self.entities,
                                &self.fov,
                                None,
                            );
                        }
                        TurnState::DropInventory => {
                            let (px, py) = self.player_position();
                            effects = self.inventory.drop_item(index, px, py);
                        }
                        _ => {}
                    }
                }
            }
            Command::LeftClick(x, y) if self.state == TurnState::Targeting => {
                if let Some(index) = self.targeting_item {
                    effects = self.inventory.use_item(
                        index,
                        self.player,
                        &mut self.entities,
                        &self.fov,
                        Some((x, y)),
                    );
                }
            }
            Command::RightClick(_, _) if self.state == TurnState::Targeting => {
                effects.push(Effect::TargetingCancelled);
            }
            Command::Exit => match self.state {
                TurnState::ShowInventory
                | TurnState::DropInventory
                | TurnState::CharacterScreen => {
                    self.state = self.previous_state;
                }
                TurnState::Targeting => {
                    effects.push(Effect::TargetingCancelled);
                }
                _ => return TickOutcome::Exit,
            },
            Command::Fullscreen => {}
            _ => {}
        }

        self.interpret(effects);
        if self.state == TurnState::EnemyTurn {
            self.enemy_turn();
        }
        TickOutcome::Continue
    }

    /// Apply a batch of effects, strictly in emission order.
    fn interpret(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Message(message) => self.log.add(message),
                Effect::Dead(id) => {
                    if id == self.player {
                        self.kill_player();
                    } else {
                        self.kill_monster(id);
                    }
                }
                Effect::ItemAdded | Effect::Consumed => {
                    self.targeting_item = None;
                    self.state = TurnState::EnemyTurn;
                }
                Effect::ItemDropped(item) => {
                    self.entities.spawn(*item);
                    self.state = TurnState::EnemyTurn;
                }
                Effect::NeedsTargeting(index) => {
                    self.previous_state = TurnState::PlayersTurn;
                    self.state = TurnState::Targeting;
                    self.targeting_item = Some(index);
                    let prompt = self
                        .inventory
                        .items
                        .get(index)
                        .and_then(|e| e.item.as_ref())
                        .and_then(|i| i.targeting_message.clone());
                    if let Some(prompt) = prompt {
                        self.log.add(prompt);
                    }
                }
                Effect::TargetingCancelled => {
                    self.state = self.previous_state;
                    self.targeting_item = None;
                    self.log.add(Message::plain("Targeting cancelled"));
                }
            }
        }
    }

    /// The player has died: announce it and freeze the session.
    fn kill_player(&mut self) {
        if let Some(player) = self.entities.get_mut(self.player) {
            player.glyph = '%';
            player.color = CLR_RED;
        }
        self.log.add(Message::new("You died!", CLR_RED));
        self.state = TurnState::PlayerDead;
    }

    /// A monster has died: announce it and leave an inert corpse behind.
    fn kill_monster(&mut self, id: EntityId) {
        let Some(monster) = self.entities.get_mut(id) else {
            return;
        };
        let announcement = format!("The {} is dead!", monster.capitalized_name());

        monster.glyph = '%';
        monster.color = CLR_RED;
        monster.blocks = false;
        monster.fighter = None;
        monster.ai = None;
        monster.name = format!("remains of {}", monster.name);
        monster.render_order = RenderOrder::Corpse;

        self.log.add(Message::new(announcement, CLR_ORANGE));
    }

    /// Let every AI-bearing entity act, in registry id order.
    ///
    /// The AI component is taken out of its entity for the duration of its
    /// turn so the behavior can mutate the rest of the world freely. The
    /// round aborts as soon as the player dies; survivors don't act.
    fn enemy_turn(&mut self) {
        let ids: Vec<EntityId> = self.entities.ids().collect();
        for id in ids {
            if id == self.player {
                continue;
            }
            let Some(mut ai) = self.entities.get_mut(id).and_then(|e| e.ai.take()) else {
                continue;
            };
            let effects = ai.take_turn(
                id,
                self.player,
                &mut self.entities,
                &self.fov,
                &self.map,
                &mut self.rng,
            );
            if let Some(entity) = self.entities.get_mut(id) {
                entity.ai = Some(ai);
            }
            self.interpret(effects);
            if self.state == TurnState::PlayerDead {
                return;
            }
        }
        if self.state == TurnState::EnemyTurn {
            self.state = TurnState::PlayersTurn;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Rect;

    fn open_map() -> GameMap {
        let mut map = GameMap::new(20, 20);
        map.carve_room(&Rect::new(0, 0, 19, 19));
        map
    }

    #[test]
    fn wait_hands_the_turn_to_enemies_and_back() {
        let mut game = Game::with_map(open_map(), 5, 5, 1);
        assert_eq!(game.state, TurnState::PlayersTurn);
        assert_eq!(game.tick(Command::Wait), TickOutcome::Continue);
        assert_eq!(game.state, TurnState::PlayersTurn);
    }

    #[test]
    fn menus_open_and_close_around_the_players_turn() {
        let mut game = Game::with_map(open_map(), 5, 5, 1);
        game.tick(Command::ShowInventory);
        assert_eq!(game.state, TurnState::ShowInventory);
        game.tick(Command::Exit);
        assert_eq!(game.state, TurnState::PlayersTurn);

        game.tick(Command::ShowCharacter);
        assert_eq!(game.state, TurnState::CharacterScreen);
        game.tick(Command::Exit);
        assert_eq!(game.state, TurnState::PlayersTurn);
    }

    #[test]
    fn exit_outside_menus_quits() {
        let mut game = Game::with_map(open_map(), 5, 5, 1);
        assert_eq!(game.tick(Command::Exit), TickOutcome::Exit);
    }

    #[test]
    fn pickup_on_bare_floor_keeps_the_turn() {
        let mut game = Game::with_map(open_map(), 5, 5, 1);
        game.tick(Command::Pickup);
        assert_eq!(game.state, TurnState::PlayersTurn);
        assert_eq!(
            game.log.last().unwrap().text,
            "There is nothing here to pick up."
        );
    }

    #[test]
    fn walking_into_a_wall_keeps_the_turn() {
        let mut game = Game::with_map(open_map(), 0, 0, 1);
        // North of (0, 0) is out of bounds, which counts as blocked.
        game.tick(Command::Move(crate::action::Direction::North));
        assert_eq!(game.state, TurnState::PlayersTurn);
        assert_eq!(game.player_position(), (0, 0));
    }

    #[test]
    fn generated_game_starts_with_a_welcome() {
        let game = Game::new(&MapConfig::default(), 42).expect("generation");
        assert_eq!(game.state, TurnState::PlayersTurn);
        assert!(game.log.last().unwrap().text.contains("welcome"));
        let (px, py) = game.player_position();
        assert!(game.fov.is_visible(px, py));
        assert!(game.map.is_explored(px, py));
    }
}
