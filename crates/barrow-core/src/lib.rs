//! barrow-core: Core game logic for the Barrow dungeon crawl
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: every mutation of the world
//! flows through the turn pipeline in [`gameloop`], randomness comes from
//! the injectable seeded [`GameRng`], and rendering/input live in the
//! front-end crate.

pub mod action;
pub mod combat;
pub mod data;
pub mod dungeon;
pub mod entity;
pub mod fov;
pub mod magic;
pub mod message;
pub mod monster;
pub mod object;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{Game, TickOutcome, TurnState};
pub use rng::GameRng;
