//! Player intents and the uniform effect protocol.
//!
//! A [`Command`] is one normalized player input, decoupled from physical
//! key/button codes. Every mutating operation in the game (attack, item
//! use, pickup, drop, AI turn) answers with an ordered `Vec<Effect>`;
//! the turn coordinator interprets the effects in emission order.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::message::Message;

pub mod movement;
pub mod pickup;

/// One normalized player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step or attack in a compass direction.
    Move(Direction),
    /// Pass the turn.
    Wait,
    /// Pick up the item under the player.
    Pickup,
    /// Open the use-item menu.
    ShowInventory,
    /// Open the drop-item menu.
    DropInventory,
    /// Select the n-th inventory entry in a menu state.
    SelectItem(usize),
    /// Open the character screen.
    ShowCharacter,
    /// Supply target coordinates while targeting.
    LeftClick(i32, i32),
    /// Cancel targeting.
    RightClick(i32, i32),
    /// Leave a menu, cancel targeting, or quit the session.
    Exit,
    /// Display toggle; the core treats it as a no-op.
    Fullscreen,
}

/// Movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// Get the direction for a unit delta, if any.
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, -1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::SouthEast),
            (-1, 1) => Some(Direction::SouthWest),
            _ => None,
        }
    }
}

/// One consequence of an action.
///
/// Effects are interpreted by the turn coordinator strictly in emission
/// order; the match there is exhaustive, so adding a variant forces every
/// interpretation site to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Narrate something in the log.
    Message(Message),
    /// An entity's hit points reached zero.
    Dead(EntityId),
    /// An item moved from the map into the player's pack.
    ItemAdded,
    /// A charge was spent; the used item leaves the inventory.
    Consumed,
    /// An item left the pack and should reappear on the map.
    ItemDropped(Box<Entity>),
    /// The selected item needs a spatial target before it can act.
    NeedsTargeting(usize),
    /// The player cancelled targeting.
    TargetingCancelled,
}

impl Effect {
    /// Shorthand for a message effect.
    pub fn message(text: impl Into<String>, color: u8) -> Self {
        Effect::Message(Message::new(text, color))
    }
}
