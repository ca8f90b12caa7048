//! Application state and main UI controller

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use barrow_core::action::Command;
use barrow_core::{Game, TickOutcome, TurnState, MESSAGE_WINDOW};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{InventoryWidget, MapWidget, MessagesWidget, StatusWidget};

/// Application state
pub struct App {
    /// The game world and turn pipeline
    game: Game,

    /// Should quit
    should_quit: bool,

    /// Color theme
    theme: Theme,

    /// Map viewport from the last draw, for mouse coordinate translation
    map_area: Rect,
}

impl App {
    pub fn new(game: Game, theme: Theme) -> Self {
        Self {
            game,
            should_quit: false,
            theme,
            map_area: Rect::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle an input event, decoding it against the current turn state.
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => key_to_command(key, self.game.state),
            Event::Mouse(mouse) if self.game.state == TurnState::Targeting => {
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.mouse_to_map(mouse.column, mouse.row)
                            .map(|(x, y)| Command::LeftClick(x, y))
                    }
                    MouseEventKind::Down(MouseButton::Right) => {
                        let (x, y) = self.mouse_to_map(mouse.column, mouse.row).unwrap_or((0, 0));
                        Some(Command::RightClick(x, y))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Run one command through the game.
    pub fn execute(&mut self, command: Command) {
        if self.game.tick(command) == TickOutcome::Exit {
            self.should_quit = true;
        }
    }

    /// Translate terminal coordinates into map coordinates, if the click
    /// landed inside the map viewport.
    fn mouse_to_map(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.map_area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        Some(((column - area.x) as i32, (row - area.y) as i32))
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: map at top, status in the middle, messages at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(self.game.map.height as u16 + 2), // Map + border
                Constraint::Length(2),                            // Status
                Constraint::Length(MESSAGE_WINDOW as u16 + 2),    // Messages
            ])
            .split(frame.area());

        // Remember where the map cells land so clicks can be translated.
        self.map_area = Block::default().borders(Borders::ALL).inner(chunks[0]);

        frame.render_widget(MapWidget::new(&self.game, &self.theme), chunks[0]);
        frame.render_widget(StatusWidget::new(&self.game, &self.theme), chunks[1]);
        frame.render_widget(MessagesWidget::new(&self.game.log, &self.theme), chunks[2]);

        match self.game.state {
            TurnState::ShowInventory => self.render_inventory(
                frame,
                "Press the key next to an item to use it, or Esc to cancel.",
            ),
            TurnState::DropInventory => self.render_inventory(
                frame,
                "Press the key next to an item to drop it, or Esc to cancel.",
            ),
            TurnState::CharacterScreen => self.render_character_screen(frame),
            TurnState::PlayerDead => self.render_death_banner(frame),
            _ => {}
        }
    }

    fn render_inventory(&self, frame: &mut Frame, title: &str) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(
            InventoryWidget::new(&self.game.inventory, &self.theme).title(title),
            area,
        );
    }

    fn render_character_screen(&self, frame: &mut Frame) {
        let area = centered_rect(40, 40, frame.area());
        frame.render_widget(Clear, area);

        let lines = match self.game.player_fighter() {
            Some(f) => vec![
                Line::from("Character Information"),
                Line::from(""),
                Line::from(format!("Maximum HP: {}", f.max_hp)),
                Line::from(format!("Attack: {}", f.power)),
                Line::from(format!("Defense: {}", f.defense)),
            ],
            None => vec![Line::from("No character.")],
        };
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title("Character")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            ),
            area,
        );
    }

    fn render_death_banner(&self, frame: &mut Frame) {
        let area = centered_rect(40, 20, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from("You died!"),
                Line::from(""),
                Line::from("i: inventory   c: character   Esc: quit"),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border_danger)),
            ),
            area,
        );
    }
}

/// A centered rect taking the given percentages of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
