//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use barrow_core::Game;

use crate::theme::Theme;

/// Widget for rendering the status line: an HP bar plus numbers.
pub struct StatusWidget<'a> {
    game: &'a Game,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(game: &'a Game, theme: &'a Theme) -> Self {
        Self { game, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(fighter) = self.game.player_fighter() else {
            return;
        };

        let label = format!(" HP: {}/{}", fighter.hp, fighter.max_hp);
        buf.set_string(
            area.x,
            area.y,
            &label,
            Style::default().fg(self.theme.text),
        );

        if area.height < 2 || area.width == 0 {
            return;
        }

        // Second line: the HP bar itself.
        let width = area.width as i32;
        let filled = if fighter.max_hp > 0 {
            (fighter.hp.max(0) * width) / fighter.max_hp
        } else {
            0
        };
        for i in 0..width {
            let color = if i < filled {
                self.theme.bar_fill
            } else {
                self.theme.bar_empty
            };
            buf.set_string(
                area.x + i as u16,
                area.y + 1,
                "█",
                Style::default().fg(color),
            );
        }
    }
}
