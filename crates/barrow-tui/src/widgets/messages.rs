//! Message log widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use barrow_core::message::MessageLog;

use crate::theme::Theme;

/// Widget showing the most recent log messages.
pub struct MessagesWidget<'a> {
    log: &'a MessageLog,
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(log: &'a MessageLog, theme: &'a Theme) -> Self {
        Self { log, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .log
            .visible()
            .iter()
            .map(|m| {
                Line::styled(
                    m.text.clone(),
                    Style::default().fg(self.theme.palette(m.color)),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Messages"))
            .render(area, buf);
    }
}
