//! Inventory display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use barrow_core::object::Inventory;

use crate::theme::Theme;

/// Lettered inventory menu, used for both the use and drop menus.
pub struct InventoryWidget<'a> {
    inventory: &'a Inventory,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(inventory: &'a Inventory, theme: &'a Theme) -> Self {
        Self {
            inventory,
            title: "Inventory",
            theme,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = if self.inventory.is_empty() {
            vec![ListItem::new(Line::styled(
                "Inventory is empty.",
                Style::default().fg(self.theme.text_dim),
            ))]
        } else {
            self.inventory
                .items
                .iter()
                .enumerate()
                .map(|(i, entity)| {
                    let letter = (b'a' + i as u8) as char;
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("({letter}) "),
                            Style::default().fg(self.theme.border_action),
                        ),
                        Span::styled(
                            entity.name.clone(),
                            Style::default().fg(self.theme.palette(entity.color)),
                        ),
                    ]))
                })
                .collect()
        };

        Widget::render(
            List::new(items).block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border_action)),
            ),
            area,
            buf,
        );
    }
}
