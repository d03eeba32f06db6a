//! Game screen: the board, both players and the victory overlay.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;
use tictac_engine::{BOARD, GameEngine, GameResult, Player, Tile};
use tracing::{debug, info, instrument};

use crate::Roster;
use crate::tui::board::{BoardView, center_rect, draw_board, player_color};
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for one game session.
///
/// Owns the engine. The evaluation is refreshed by calling
/// [`GameEngine::evaluate`] after every accepted move and every restart;
/// rendering only reads the cached copy.
#[derive(Debug, Getters)]
pub struct GameScreen {
    engine: GameEngine,
    roster: Roster,
    cursor: Tile,
    result: Option<GameResult>,
}

impl GameScreen {
    /// Starts a fresh game for the given players.
    #[instrument]
    pub fn new(roster: Roster) -> Self {
        let engine = GameEngine::new();
        let result = engine.evaluate();
        Self {
            engine,
            roster,
            cursor: BOARD[1][1],
            result,
        }
    }

    /// Claims `tile` for the player to move, re-evaluating when it changed anything.
    #[instrument(skip(self))]
    fn claim(&mut self, tile: Tile) {
        match self.engine.apply_move(tile) {
            Some(action) => {
                info!(%action, "Move played");
                self.result = self.engine.evaluate();
                if let Some(result) = &self.result {
                    info!(%result, "Game won");
                }
            }
            None => debug!(%tile, "Tile already claimed"),
        }
    }

    #[instrument(skip(self))]
    fn restart(&mut self) {
        self.engine.restart();
        self.result = self.engine.evaluate();
        self.cursor = BOARD[1][1];
    }

    fn render_players(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = Player::iter()
            .map(|player| {
                let profile = self.roster.profile(player);
                let active = self.result.is_none() && self.engine.current_player() == player;
                let name_style = if active {
                    Style::default()
                        .fg(player_color(player))
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", profile.icon()),
                        Style::default().fg(player_color(player)),
                    ),
                    Span::raw(format!("{}  ", player)),
                    Span::styled(profile.display_name().clone(), name_style),
                ])
            })
            .collect();

        let players = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(players, area);
    }

    fn render_victory(&self, frame: &mut Frame, result: &GameResult) {
        let winner = self.roster.profile(result.winner());
        let area = center_rect(frame.area(), 44, 7);
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from(Span::styled(
                format!("Victory to Player {}!", winner.display_name()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{}  ★", winner.icon()),
                Style::default().fg(player_color(result.winner())),
            )),
            Line::from(""),
            Line::from("r: Restart | q: Quit"),
        ];

        let overlay = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, area);
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(11),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        self.render_players(frame, chunks[1]);

        draw_board(
            frame,
            chunks[2],
            &BoardView {
                engine: &self.engine,
                roster: &self.roster,
                cursor: self.cursor,
                result: self.result.as_ref(),
            },
        );

        let help = Paragraph::new("←↑↓→: Move | Enter/Space or 1-9: Claim | Esc: Home")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        if let Some(result) = &self.result {
            self.render_victory(frame, result);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if self.result.is_some() {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    info!("Restart requested");
                    self.restart();
                    ScreenTransition::Stay
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    ScreenTransition::GoToHome
                }
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.claim(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                if let Ok(tile) = c.to_string().parse::<Tile>() {
                    self.cursor = tile;
                    self.claim(tile);
                }
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::GoToHome,
            _ => ScreenTransition::Stay,
        }
    }
}
