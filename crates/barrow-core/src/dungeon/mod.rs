//! The dungeon map: a passability grid plus spawn placement.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod generation;
mod rect;

pub use generation::{MapConfig, make_map};
pub use rect::Rect;

bitflags! {
    /// Per-tile terrain flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileFlags: u8 {
        /// Entities cannot stand here.
        const BLOCKED = 0x01;
        /// Sight does not pass through.
        const BLOCK_SIGHT = 0x02;
        /// The player has seen this tile at some point.
        const EXPLORED = 0x04;
    }
}

// Manual serde impl for TileFlags
impl Serialize for TileFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TileFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(TileFlags::from_bits_truncate(bits))
    }
}

/// Dungeon generation failure.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no rooms could be placed on a {width}x{height} map")]
    NoRooms { width: i32, height: i32 },
}

/// Grid of tiles. Freshly created maps are solid rock; generation carves
/// rooms and tunnels into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    tiles: Vec<TileFlags>,
}

impl GameMap {
    pub fn new(width: i32, height: i32) -> Self {
        let solid = TileFlags::BLOCKED | TileFlags::BLOCK_SIGHT;
        Self {
            width,
            height,
            tiles: vec![solid; (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    /// Terrain passability query. Out-of-bounds counts as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.tiles[i].contains(TileFlags::BLOCKED),
            None => true,
        }
    }

    /// Whether sight passes through this tile.
    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.tiles[i].contains(TileFlags::BLOCK_SIGHT),
            None => true,
        }
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.tiles[i].contains(TileFlags::EXPLORED),
            None => false,
        }
    }

    pub fn mark_explored(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i].insert(TileFlags::EXPLORED);
        }
    }

    /// Make a single tile passable and transparent.
    pub fn carve(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i].remove(TileFlags::BLOCKED | TileFlags::BLOCK_SIGHT);
        }
    }

    /// Carve the interior of a room rectangle, leaving its border as wall.
    pub fn carve_room(&mut self, room: &Rect) {
        for x in (room.x1 + 1)..room.x2 {
            for y in (room.y1 + 1)..room.y2 {
                self.carve(x, y);
            }
        }
    }

    /// Carve a horizontal tunnel between two columns.
    pub fn carve_h_tunnel(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.carve(x, y);
        }
    }

    /// Carve a vertical tunnel between two rows.
    pub fn carve_v_tunnel(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.carve(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_map_is_solid_rock() {
        let map = GameMap::new(10, 10);
        assert!(map.is_blocked(5, 5));
        assert!(map.blocks_sight(5, 5));
        assert!(!map.is_explored(5, 5));
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let map = GameMap::new(10, 10);
        assert!(map.is_blocked(-1, 0));
        assert!(map.is_blocked(10, 0));
        assert!(map.blocks_sight(0, 99));
    }

    #[test]
    fn carve_room_leaves_walls() {
        let mut map = GameMap::new(10, 10);
        map.carve_room(&Rect::new(2, 2, 6, 6));
        assert!(!map.is_blocked(3, 3));
        assert!(!map.is_blocked(5, 5));
        // The rectangle border stays wall.
        assert!(map.is_blocked(2, 2));
        assert!(map.is_blocked(6, 4));
    }

    #[test]
    fn tunnels_connect_both_endpoints() {
        let mut map = GameMap::new(20, 20);
        map.carve_h_tunnel(12, 3, 7);
        for x in 3..=12 {
            assert!(!map.is_blocked(x, 7));
        }
        map.carve_v_tunnel(15, 2, 4);
        for y in 2..=15 {
            assert!(!map.is_blocked(4, y));
        }
    }
}
