//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use barrow_core::Game;

use crate::theme::Theme;

/// Widget for rendering the dungeon map.
pub struct MapWidget<'a> {
    game: &'a Game,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(game: &'a Game, theme: &'a Theme) -> Self {
        Self { game, theme }
    }

    fn terrain_display(&self, x: i32, y: i32) -> (char, Style) {
        let map = &self.game.map;
        if !map.is_explored(x, y) {
            return (' ', Style::default());
        }

        let visible = self.game.fov.is_visible(x, y);
        if map.blocks_sight(x, y) {
            let color = if visible {
                self.theme.wall_lit
            } else {
                self.theme.wall_dark
            };
            ('#', Style::default().fg(color))
        } else {
            let color = if visible {
                self.theme.floor_lit
            } else {
                self.theme.floor_dark
            };
            ('.', Style::default().fg(color))
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Barrow");
        let inner = block.inner(area);
        block.render(area, buf);

        let map = &self.game.map;
        for y in 0..map.height.min(inner.height as i32) {
            for x in 0..map.width.min(inner.width as i32) {
                let (ch, style) = self.terrain_display(x, y);
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }

        // Entities on top of terrain, corpses under items under actors,
        // only while in sight.
        let mut drawable: Vec<_> = self
            .game
            .entities
            .iter()
            .filter(|(_, e)| self.game.fov.is_visible(e.x, e.y))
            .map(|(_, e)| e)
            .collect();
        drawable.sort_by_key(|e| e.render_order);

        for entity in drawable {
            if entity.x >= inner.width as i32 || entity.y >= inner.height as i32 {
                continue;
            }
            if let Some(cell) = buf.cell_mut(Position::new(
                inner.x + entity.x as u16,
                inner.y + entity.y as u16,
            )) {
                cell.set_char(entity.glyph);
                cell.set_style(Style::default().fg(self.theme.palette(entity.color)));
            }
        }
    }
}
