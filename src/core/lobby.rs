use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph},
    layout::{Layout, Constraint, Direction, Alignment},
    style::{Style, Color, Modifier},
    Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use anyhow::Result;

use crate::games::hangman::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyResult {
    Play(Level),
    Quit,
}

/// Level selection menu shown before every game.
pub struct LobbyManager {
    pub selected_index: usize,
}

impl LobbyManager {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<LobbyResult> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(result) = self.handle_key(key.code) {
                        return Ok(result);
                    }
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Option<LobbyResult> {
        match code {
            KeyCode::Up => self.selected_index = self.selected_index.saturating_sub(1),
            KeyCode::Down => self.selected_index = (self.selected_index + 1).min(Level::ALL.len() - 1),
            KeyCode::Char('1') => return Some(LobbyResult::Play(Level::Word)),
            KeyCode::Char('2') => return Some(LobbyResult::Play(Level::Phrase)),
            KeyCode::Enter => return Some(LobbyResult::Play(Level::ALL[self.selected_index])),
            KeyCode::Char('q') | KeyCode::Esc => return Some(LobbyResult::Quit),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" HANGMAN ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0]
        );

        let items: Vec<ListItem> = Level::ALL.iter().enumerate().map(|(i, level)| {
            let style = if i == self.selected_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" » {}. {} : {}", i + 1, level.title(), level.description())).style(style)
        }).collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" SELECT A LEVEL ").borders(Borders::ALL)),
            chunks[1]
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Start  [1/2] Quick pick  [Q] Quit")
                .alignment(Alignment::Center),
            chunks[2]
        );
    }
}

impl Default for LobbyManager {
    fn default() -> Self {
        Self::new()
    }
}
