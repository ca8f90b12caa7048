//! Field of view: the set of tiles currently visible to the player.
//!
//! Recomputed by the turn coordinator whenever the player moves; everyone
//! else treats it as a pure boolean query service.

use serde::{Deserialize, Serialize};

use crate::dungeon::GameMap;

/// Boolean visibility grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FovMap {
    width: i32,
    height: i32,
    visible: Vec<bool>,
}

impl FovMap {
    /// Create a map with nothing visible.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            visible: vec![false; (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.visible[i],
            None => false,
        }
    }

    /// Recompute visibility from an origin with a circular radius.
    ///
    /// A tile is visible when an unobstructed Bresenham line reaches it;
    /// a sight-blocking tile is itself visible but hides what lies beyond.
    pub fn recompute(&mut self, map: &GameMap, origin_x: i32, origin_y: i32, radius: i32) {
        self.visible.fill(false);

        if let Some(i) = self.index(origin_x, origin_y) {
            self.visible[i] = true;
        }

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (tx, ty) = (origin_x + dx, origin_y + dy);
                let Some(i) = self.index(tx, ty) else {
                    continue;
                };
                if line_of_sight(map, origin_x, origin_y, tx, ty) {
                    self.visible[i] = true;
                }
            }
        }
    }

    /// Positions currently visible, for explored-tile bookkeeping.
    pub fn visible_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| (i as i32 % width, i as i32 / width))
    }
}

/// Bresenham walk from origin to target, stopped by sight-blocking tiles.
fn line_of_sight(map: &GameMap, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
    let mut x = x0;
    let mut y = y0;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (x, y) != (x0, y0) && map.blocks_sight(x, y) {
            // The blocking tile itself can be seen, but nothing beyond.
            return x == x1 && y == y1;
        }

        if x == x1 && y == y1 {
            return true;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
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
    fn origin_and_neighbors_are_visible() {
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&open_map(), 10, 10, 5);
        assert!(fov.is_visible(10, 10));
        assert!(fov.is_visible(11, 10));
        assert!(fov.is_visible(10, 9));
    }

    #[test]
    fn radius_is_circular() {
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&open_map(), 10, 10, 5);
        assert!(fov.is_visible(15, 10));
        assert!(!fov.is_visible(16, 10));
        // Diagonal corner of the bounding square lies outside the circle.
        assert!(!fov.is_visible(15, 15));
    }

    #[test]
    fn walls_hide_what_is_behind_them() {
        // Carve everything except a vertical wall segment east of the viewer.
        let mut map = GameMap::new(20, 20);
        for y in 0..20 {
            for x in 0..20 {
                let in_wall = x == 12 && (8..=12).contains(&y);
                if !in_wall {
                    map.carve(x, y);
                }
            }
        }
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&map, 10, 10, 8);

        // The wall itself is visible, the tile behind it is not.
        assert!(fov.is_visible(12, 10));
        assert!(!fov.is_visible(14, 10));
    }

    #[test]
    fn out_of_bounds_is_never_visible() {
        let mut fov = FovMap::new(20, 20);
        fov.recompute(&open_map(), 1, 1, 5);
        assert!(!fov.is_visible(-1, 1));
        assert!(!fov.is_visible(1, -3));
    }
}
