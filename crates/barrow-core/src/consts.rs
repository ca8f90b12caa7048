//! Game-wide constants.

/// Default dungeon width in tiles.
pub const MAP_WIDTH: i32 = 80;

/// Default dungeon height in tiles.
pub const MAP_HEIGHT: i32 = 43;

/// Sight radius for field-of-view computation.
pub const FOV_RADIUS: i32 = 10;

/// Maximum rooms attempted per level.
pub const MAX_ROOMS: i32 = 30;

/// Room dimensions, inclusive bounds.
pub const ROOM_MIN_SIZE: i32 = 6;
pub const ROOM_MAX_SIZE: i32 = 10;

/// Spawn caps per room (the first room is always left safe).
pub const MAX_MONSTERS_PER_ROOM: i32 = 3;
pub const MAX_ITEMS_PER_ROOM: i32 = 2;

/// Player starting stats.
pub const PLAYER_HP: i32 = 30;
pub const PLAYER_DEFENSE: i32 = 2;
pub const PLAYER_POWER: i32 = 5;

/// Player carry capacity, in item slots.
pub const INVENTORY_CAPACITY: usize = 26;

/// Number of log messages kept in the visible window.
pub const MESSAGE_WINDOW: usize = 6;
