//! Input handling - convert key events to commands
//!
//! Key bindings depend on what the game is currently waiting for, so the
//! decoder takes the current [`TurnState`]. Mouse events are translated
//! in app.rs where the map viewport offset is known.

use barrow_core::action::{Command, Direction};
use barrow_core::TurnState;
use crossterm::event::{KeyCode, KeyEvent};

/// Convert a key event to a game command for the given turn state.
pub fn key_to_command(key: KeyEvent, state: TurnState) -> Option<Command> {
    match state {
        TurnState::PlayersTurn | TurnState::EnemyTurn => player_turn_key(key),
        TurnState::PlayerDead => dead_key(key),
        TurnState::ShowInventory | TurnState::DropInventory => menu_key(key),
        TurnState::Targeting | TurnState::CharacterScreen => match key.code {
            KeyCode::Esc => Some(Command::Exit),
            KeyCode::F(11) => Some(Command::Fullscreen),
            _ => None,
        },
    }
}

fn player_turn_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Vi keys (hjklyubn)
        KeyCode::Char('h') => Some(Command::Move(Direction::West)),
        KeyCode::Char('j') => Some(Command::Move(Direction::South)),
        KeyCode::Char('k') => Some(Command::Move(Direction::North)),
        KeyCode::Char('l') => Some(Command::Move(Direction::East)),
        KeyCode::Char('y') => Some(Command::Move(Direction::NorthWest)),
        KeyCode::Char('u') => Some(Command::Move(Direction::NorthEast)),
        KeyCode::Char('b') => Some(Command::Move(Direction::SouthWest)),
        KeyCode::Char('n') => Some(Command::Move(Direction::SouthEast)),

        // Arrow keys
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),

        // Actions
        KeyCode::Char('.') | KeyCode::Char(' ') => Some(Command::Wait),
        KeyCode::Char('g') | KeyCode::Char(',') => Some(Command::Pickup),
        KeyCode::Char('i') => Some(Command::ShowInventory),
        KeyCode::Char('d') => Some(Command::DropInventory),
        KeyCode::Char('c') => Some(Command::ShowCharacter),

        KeyCode::F(11) => Some(Command::Fullscreen),
        KeyCode::Esc => Some(Command::Exit),
        _ => None,
    }
}

fn dead_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('i') => Some(Command::ShowInventory),
        KeyCode::Char('c') => Some(Command::ShowCharacter),
        KeyCode::F(11) => Some(Command::Fullscreen),
        KeyCode::Esc => Some(Command::Exit),
        _ => None,
    }
}

fn menu_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Lettered menu entries: a selects the first item, b the second...
        KeyCode::Char(c @ 'a'..='z') => Some(Command::SelectItem(c as usize - 'a' as usize)),
        KeyCode::F(11) => Some(Command::Fullscreen),
        KeyCode::Esc => Some(Command::Exit),
        _ => None,
    }
}
